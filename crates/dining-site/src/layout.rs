//! The static page skeleton and its fallback copy.
//!
//! This mirrors the markup shipped in `site/index.html`: every element that
//! content loading or form wiring touches, carrying the text a visitor sees
//! when `/api/content` is unreachable.

use crate::ids;
use crate::render::stat_row;
use crate::view::{Element, MemoryPage, PageView};

/// Build the default page with its static fallback content.
pub fn default_page() -> MemoryPage {
    let mut page = MemoryPage::new()
        .with(ids::BRAND_NAME, "span", "Maison Ember")
        .with(ids::FOOTER_BRAND_NAME, "strong", "Maison Ember")
        .with(ids::BRAND_ADDRESS, "address", "14 Harbour Lane, Old Town")
        .with(ids::HERO_EYEBROW, "p", "Fine dining since 1998")
        .with(ids::HERO_TITLE, "h1", "An evening worth remembering")
        .with(
            ids::HERO_DESCRIPTION,
            "p",
            "Seasonal tasting menus cooked over open flame.",
        )
        .with(ids::HERO_CAPTION, "figcaption", "Inside our kitchen")
        .with(ids::HERO_STATS, "div", "")
        .with(ids::ABOUT_EYEBROW, "p", "Our story")
        .with(ids::ABOUT_TITLE, "h2", "Craft, fire and patience")
        .with(
            ids::ABOUT_DESCRIPTION,
            "p",
            "A small team cooking with produce from farms we know by name.",
        )
        .with(ids::ABOUT_BADGE, "span", "Chef's table")
        .with(ids::MENU_EYEBROW, "p", "The menu")
        .with(ids::MENU_TITLE, "h2", "Signature dishes")
        .with(ids::MENU_GRID, "div", "")
        .with(ids::VIDEOS_GRID, "div", "")
        .with(ids::BOOKING_TITLE, "h2", "Reserve a table")
        .with(
            ids::BOOKING_DESCRIPTION,
            "p",
            "Tell us when you would like to join us.",
        )
        .with(ids::ORDERING_TITLE, "h2", "Order for pickup")
        .with(
            ids::ORDERING_DESCRIPTION,
            "p",
            "Our kitchen favourites, ready when you are.",
        )
        .with(ids::FOOTER_TAGLINE, "p", "Cooked slowly, served warmly.")
        .with(ids::FOOTER_SOCIAL, "a", "@maisonember")
        .with(ids::FOOTER_HOURS_PRIMARY, "li", "Tue-Sat 18:00-23:00")
        .with(ids::FOOTER_HOURS_SECONDARY, "li", "Sun 12:00-16:00")
        .with(ids::RESERVATION_FORM, "form", "")
        .with(ids::RESERVATION_FEEDBACK, "p", "")
        .with(ids::ORDER_FORM, "form", "")
        .with(ids::ORDER_FEEDBACK, "p", "");

    let mut email = Element::new("a", "hello@maisonember.com");
    email
        .attributes
        .insert("href".to_string(), "mailto:hello@maisonember.com".to_string());
    page.insert(ids::BRAND_EMAIL, email);

    let mut phone = Element::new("a", "+1 555 0134");
    phone
        .attributes
        .insert("href".to_string(), "tel:+15550134".to_string());
    page.insert(ids::BRAND_PHONE, phone);

    let mut video = Element::new("video", "");
    video
        .attributes
        .insert("poster".to_string(), "media/restaurant-poster.svg".to_string());
    page.insert(ids::HERO_VIDEO, video);

    let mut about_image = Element::new("img", "");
    about_image
        .attributes
        .insert("src".to_string(), "media/kitchen-poster.svg".to_string());
    page.insert(ids::ABOUT_IMAGE, about_image);

    page.replace_children(
        ids::HERO_STATS,
        vec![stat_row("25", "Years"), stat_row("12", "Courses")],
    );

    page
}
