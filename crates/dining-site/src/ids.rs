//! Element identifiers the page exposes to rendering and form wiring.

pub const BRAND_NAME: &str = "brand-name";
pub const FOOTER_BRAND_NAME: &str = "footer-brand-name";
pub const BRAND_EMAIL: &str = "brand-email";
pub const BRAND_ADDRESS: &str = "brand-address";
pub const BRAND_PHONE: &str = "brand-phone";

pub const HERO_EYEBROW: &str = "hero-eyebrow";
pub const HERO_TITLE: &str = "hero-title";
pub const HERO_DESCRIPTION: &str = "hero-description";
pub const HERO_CAPTION: &str = "hero-caption";
pub const HERO_VIDEO: &str = "hero-video";
pub const HERO_STATS: &str = "hero-stats";

pub const ABOUT_EYEBROW: &str = "about-eyebrow";
pub const ABOUT_TITLE: &str = "about-title";
pub const ABOUT_DESCRIPTION: &str = "about-description";
pub const ABOUT_BADGE: &str = "about-badge";
pub const ABOUT_IMAGE: &str = "about-image";

pub const MENU_EYEBROW: &str = "menu-eyebrow";
pub const MENU_TITLE: &str = "menu-title";
pub const MENU_GRID: &str = "menu-grid";

pub const VIDEOS_GRID: &str = "videos-grid";

pub const BOOKING_TITLE: &str = "booking-title";
pub const BOOKING_DESCRIPTION: &str = "booking-description";
pub const ORDERING_TITLE: &str = "ordering-title";
pub const ORDERING_DESCRIPTION: &str = "ordering-description";

pub const FOOTER_TAGLINE: &str = "footer-tagline";
pub const FOOTER_SOCIAL: &str = "footer-social";
pub const FOOTER_HOURS_PRIMARY: &str = "footer-hours-1";
pub const FOOTER_HOURS_SECONDARY: &str = "footer-hours-2";

pub const RESERVATION_FORM: &str = "reservation-form";
pub const RESERVATION_FEEDBACK: &str = "reservation-feedback";
pub const ORDER_FORM: &str = "order-form";
pub const ORDER_FEEDBACK: &str = "order-feedback";
