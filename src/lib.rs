//! Looping drag carousel and panel switcher for a single-page kiosk.
//!
//! The engines in [`carousel`] and [`switcher`] are plain state machines with
//! time passed in explicitly, so they run and test without a browser. The
//! Yew binary owns the timers and feeds them events.

pub mod carousel;
pub mod config;
pub mod content;
pub mod logging;
pub mod switcher;

pub use carousel::{Carousel, Direction, Gesture, Motion, StripFrame};
pub use config::{CarouselConfig, SwitcherConfig};
pub use content::{Catalog, ContentError, Item, Panel};
pub use switcher::{PanelSwitcher, ScheduledReversion};

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}
