//! Page logic for the theme-park website.
//!
//! Everything in this library is plain state and arithmetic so it can be
//! exercised without a browser. The binary target binds it to the
//! pre-rendered pages.

pub mod carousel;
pub mod config;
pub mod dashboard;
pub mod pricing;
pub mod rides;
pub mod ticket;
pub mod utils;

pub use carousel::{normalize_slide_index, Carousel, SlideMarker, SlideWindow};
pub use dashboard::{DashboardState, PanePhase, PaneState};
pub use pricing::PriceMode;
pub use rides::{
    apply_maintenance_overrides, default_rides, default_schedule, derive_wait_times,
    prepare_rides, read_rides_from_csv_string, MaintenanceSchedule, Ride, RideDataError,
    RideStatus, Span, WaitEstimate,
};
pub use ticket::TicketCounter;
