//! Projects a `ContentDocument` onto a page.

use crate::content::{
    AboutSection, BrandSection, ContentDocument, FooterSection, FormSection, HeroSection,
    MenuItem, MenuSection, Stat, VideoItem,
};
use crate::ids;
use crate::view::{Node, PageView};

/// Image used for a menu card without one.
pub const DEFAULT_DISH_IMAGE: &str = "media/dishes/signature-dish.svg";

/// Clip used for a video card without one.
pub const DEFAULT_VIDEO: &str = "media/restaurant-tour.mp4";

pub const DEFAULT_MENU_NAME: &str = "Menu Item";
pub const DEFAULT_MENU_TAG: &str = "Featured";
pub const DEFAULT_MENU_PRICE: &str = "$0";

/// Write every present field of `doc` onto `page`.
///
/// Absent fields leave the page's existing markup alone. Lists that are
/// present (even empty) replace their container's children.
pub fn apply_content<V: PageView + ?Sized>(page: &mut V, doc: &ContentDocument) {
    if let Some(brand) = &doc.brand {
        apply_brand(page, brand);
    }
    if let Some(hero) = &doc.hero {
        apply_hero(page, hero);
    }
    if let Some(about) = &doc.about {
        apply_about(page, about);
    }
    if let Some(menu) = &doc.menu {
        apply_menu(page, menu);
    }
    if let Some(booking) = &doc.booking {
        apply_form_section(page, booking, ids::BOOKING_TITLE, ids::BOOKING_DESCRIPTION);
    }
    if let Some(ordering) = &doc.ordering {
        apply_form_section(page, ordering, ids::ORDERING_TITLE, ids::ORDERING_DESCRIPTION);
    }
    if let Some(footer) = &doc.footer {
        apply_footer(page, footer);
    }
    if let Some(videos) = &doc.videos {
        build_videos(page, videos);
    }
}

/// Replace the menu grid with one card per item, in order.
pub fn build_menu<V: PageView + ?Sized>(page: &mut V, items: &[MenuItem]) {
    if !page.contains(ids::MENU_GRID) {
        return;
    }
    let cards = items.iter().map(menu_card).collect();
    page.replace_children(ids::MENU_GRID, cards);
}

/// Replace the videos grid with one card per item, in order.
pub fn build_videos<V: PageView + ?Sized>(page: &mut V, items: &[VideoItem]) {
    if !page.contains(ids::VIDEOS_GRID) {
        return;
    }
    let cards = items.iter().map(video_card).collect();
    page.replace_children(ids::VIDEOS_GRID, cards);
}

pub fn menu_card(item: &MenuItem) -> Node {
    let name = item.name.as_deref().unwrap_or(DEFAULT_MENU_NAME);
    let image = item.image.as_deref().unwrap_or(DEFAULT_DISH_IMAGE);
    let alt = item.alt.as_deref().unwrap_or(name);

    Node::new("article")
        .class("menu-item")
        .child(
            Node::new("img")
                .class("menu-photo")
                .attr("src", image)
                .attr("alt", alt)
                .attr("loading", "lazy"),
        )
        .child(
            Node::new("div")
                .class("menu-body")
                .child(
                    Node::new("span")
                        .class("menu-tag")
                        .text(item.tag.as_deref().unwrap_or(DEFAULT_MENU_TAG)),
                )
                .child(Node::new("h3").class("menu-name").text(name))
                .child(
                    Node::new("p")
                        .class("menu-description")
                        .text(item.description.as_deref().unwrap_or_default()),
                )
                .child(
                    Node::new("span")
                        .class("menu-price")
                        .text(item.price.as_deref().unwrap_or(DEFAULT_MENU_PRICE)),
                ),
        )
}

pub fn video_card(item: &VideoItem) -> Node {
    let mut media = Node::new("video")
        .class("video-media")
        .attr("src", item.video.as_deref().unwrap_or(DEFAULT_VIDEO))
        .attr("preload", "metadata")
        .attr("controls", "");
    if let Some(poster) = &item.poster {
        media = media.attr("poster", poster);
    }

    Node::new("article")
        .class("video-card")
        .child(media)
        .child(
            Node::new("div")
                .class("video-body")
                .child(
                    Node::new("h3")
                        .class("video-title")
                        .text(item.title.as_deref().unwrap_or_default()),
                )
                .child(
                    Node::new("p")
                        .class("video-description")
                        .text(item.description.as_deref().unwrap_or_default()),
                ),
        )
}

pub fn stat_row(value: &str, label: &str) -> Node {
    Node::new("div")
        .class("stat")
        .child(Node::new("strong").class("stat-value").text(value))
        .child(Node::new("span").class("stat-label").text(label))
}

fn write_text<V: PageView + ?Sized>(page: &mut V, id: &str, value: &Option<String>) {
    if let Some(text) = value {
        page.set_text(id, text);
    }
}

fn write_attribute<V: PageView + ?Sized>(
    page: &mut V,
    id: &str,
    name: &str,
    value: &Option<String>,
) {
    if let Some(value) = value {
        page.set_attribute(id, name, value);
    }
}

fn apply_brand<V: PageView + ?Sized>(page: &mut V, brand: &BrandSection) {
    write_text(page, ids::BRAND_NAME, &brand.name);
    write_text(page, ids::FOOTER_BRAND_NAME, &brand.name);
    write_text(page, ids::BRAND_ADDRESS, &brand.address);

    if let Some(email) = &brand.email {
        page.set_text(ids::BRAND_EMAIL, email);
        page.set_attribute(ids::BRAND_EMAIL, "href", &format!("mailto:{}", email.trim()));
    }
    if let Some(phone) = &brand.phone {
        page.set_text(ids::BRAND_PHONE, phone);
        page.set_attribute(ids::BRAND_PHONE, "href", &format!("tel:{}", dial_string(phone)));
    }
}

fn apply_hero<V: PageView + ?Sized>(page: &mut V, hero: &HeroSection) {
    write_text(page, ids::HERO_EYEBROW, &hero.eyebrow);
    write_text(page, ids::HERO_TITLE, &hero.title);
    write_text(page, ids::HERO_DESCRIPTION, &hero.description);
    write_text(page, ids::HERO_CAPTION, &hero.caption);
    write_attribute(page, ids::HERO_VIDEO, "poster", &hero.poster);

    if let Some(video) = &hero.video {
        page.set_attribute(ids::HERO_VIDEO, "src", video);
        page.reload_media(ids::HERO_VIDEO);
    }

    if let Some(stats) = &hero.stats {
        let rows = stats.iter().map(stat_node).collect();
        page.replace_children(ids::HERO_STATS, rows);
    }
}

fn stat_node(stat: &Stat) -> Node {
    stat_row(
        stat.value.as_deref().unwrap_or_default(),
        stat.label.as_deref().unwrap_or_default(),
    )
}

fn apply_about<V: PageView + ?Sized>(page: &mut V, about: &AboutSection) {
    write_text(page, ids::ABOUT_EYEBROW, &about.eyebrow);
    write_text(page, ids::ABOUT_TITLE, &about.title);
    write_text(page, ids::ABOUT_DESCRIPTION, &about.description);
    write_text(page, ids::ABOUT_BADGE, &about.badge);
    write_attribute(page, ids::ABOUT_IMAGE, "src", &about.image);
}

fn apply_menu<V: PageView + ?Sized>(page: &mut V, menu: &MenuSection) {
    write_text(page, ids::MENU_EYEBROW, &menu.eyebrow);
    write_text(page, ids::MENU_TITLE, &menu.title);
    if let Some(items) = &menu.items {
        build_menu(page, items);
    }
}

fn apply_form_section<V: PageView + ?Sized>(
    page: &mut V,
    section: &FormSection,
    title_id: &str,
    description_id: &str,
) {
    write_text(page, title_id, &section.title);
    write_text(page, description_id, &section.description);
}

fn apply_footer<V: PageView + ?Sized>(page: &mut V, footer: &FooterSection) {
    write_text(page, ids::FOOTER_TAGLINE, &footer.tagline);
    write_text(page, ids::FOOTER_SOCIAL, &footer.social);

    // Two fixed slots; later entries are never shown.
    if let Some(hours) = &footer.hours {
        if let Some(first) = hours.first() {
            write_text(page, ids::FOOTER_HOURS_PRIMARY, first);
        }
        if let Some(second) = hours.get(1) {
            write_text(page, ids::FOOTER_HOURS_SECONDARY, second);
        }
    }
}

/// Phone number reduced to what a `tel:` link accepts.
fn dial_string(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
