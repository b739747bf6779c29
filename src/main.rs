//! Entry point for the theme-park page scripts.
//! Installs logging, mounts whichever page bindings the current document
//! supports and keeps them alive until the page is discarded.

use log::{error, info};
use std::cell::RefCell;
use themepark_web::config::LOG_LEVEL;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, PageTransitionEvent};

mod datepicker;
mod dom;
mod logger;
mod promotions;
mod rides_page;

use dom::PageError;
use promotions::PromotionsPage;
use rides_page::RidesPage;

struct MountedPages {
    promotions: Option<PromotionsPage>,
    rides: Option<RidesPage>,
}

thread_local! {
    /// Page bindings live here for the lifetime of the document.
    static MOUNTED: RefCell<Option<MountedPages>> = const { RefCell::new(None) };
}

fn mount_or_log<T>(name: &str, mount: fn() -> Result<Option<T>, PageError>) -> Option<T> {
    match mount() {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to mount {} page: {}", name, e);
            None
        }
    }
}

/// Drop all page bindings: listeners are removed and the carousel timer stops.
fn teardown() {
    let Some(pages) = MOUNTED.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    if let Some(promotions) = pages.promotions {
        promotions.teardown();
    }
    drop(pages.rides);
    info!("Page bindings torn down");
}

fn install_teardown_hook() {
    let on_pagehide = Closure::<dyn FnMut(Event)>::new(|event: Event| {
        // Pages kept in the back/forward cache may come back, keep them bound
        let persisted = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if !persisted {
            teardown();
        }
    });
    if let Err(e) = gloo_utils::window()
        .add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())
    {
        error!("Failed to install pagehide hook: {:?}", e);
    }
    // Lives as long as the window
    on_pagehide.forget();
}

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    logger::init(LOG_LEVEL);

    let pages = MountedPages {
        promotions: mount_or_log("promotions", PromotionsPage::mount),
        rides: mount_or_log("rides", RidesPage::mount),
    };
    if pages.promotions.is_none() && pages.rides.is_none() {
        info!("No interactive sections on this page");
    }
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(pages));
    install_teardown_hook();
}
