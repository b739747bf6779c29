//! Application-level configuration constants.

use log::LevelFilter;

// Logging
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Carousel behavior
pub const CAROUSEL_ADVANCE_MS: u32 = 20_000;
pub const CAROUSEL_START_INDEX: usize = 1;

// Ticket stepper
pub const MIN_TICKET_COUNT: u32 = 1;

// Ride wait-time bounds (inclusive, minutes)
pub const MIN_RIDE_WAIT_MINS: u32 = 1;
pub const MAX_RIDE_WAIT_MINS: u32 = 120;

// Preset maintenance slots (HH:MM:SS)
pub const MAINTENANCE_SLOTS: [&str; 2] = ["14:30:00", "17:15:00"];

/// Element selectors for the promotions and membership page.
pub mod promotions {
    pub const TICKET_COUNT: &str = "#ticket-count";
    pub const DECREMENT_BUTTON: &str = "#decrement";
    pub const INCREMENT_BUTTON: &str = "#increment";
    pub const DATE_PICKER: &str = "#datepicker";
    pub const PRICE_CHECKBOX: &str = "#checkbox";
    pub const STANDARD_PRICES: &str = ".price-standard";
    pub const DISCOUNT_PRICES: &str = ".price-discount";
    pub const SLIDES: &str = ".slides";
}

/// Element selectors for the rides page.
pub mod rides {
    pub const PANES_CONTAINER: &str = "#ride-info-panes-cont";
    pub const PANES: &str = "#ride-info-panes-cont .ride-info-pane";
    pub const WAIT_TEXTS: &str = "#ride-info-panes-cont .ride-info-pane .ride-wait-time-txt";
    pub const STATUS_TEXTS: &str = "#ride-info-panes-cont .ride-info-pane .ride-status-txt";
    pub const COLLAPSE_BUTTONS: &str =
        "#ride-info-panes-cont .ride-info-pane .ride-info-pane-collapse-btn";
    pub const MAP_CONTAINER: &str = "#themepark-map-img-cont";
    pub const PINS: &str = "#themepark-map-img-cont .ride-location-pin-icon";
}

/// CSS class names toggled by the page scripts.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const BLUR: &str = "blur";
    pub const COLLAPSE: &str = "collapse";
    pub const HIDE: &str = "hide";
    pub const STATUS_OPEN: &str = "txt-color-open";
    pub const STATUS_CLOSED: &str = "txt-color-close";
}
