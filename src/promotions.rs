//! Promotions and membership page: ticket stepper, date picker, price switch
//! and the auto-advancing carousel.

use crate::datepicker::{self, DatePickerConfig};
use crate::dom::{self, Listener, PageError};
use gloo_timers::callback::Interval;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use themepark_web::config::classes::{ACTIVE, BLUR};
use themepark_web::config::promotions::*;
use themepark_web::config::{CAROUSEL_ADVANCE_MS, CAROUSEL_START_INDEX};
use themepark_web::pricing::paired_len;
use themepark_web::{Carousel, PriceMode, SlideWindow, TicketCounter};
use web_sys::{Element, HtmlInputElement};

struct TicketStepper {
    counter: TicketCounter,
    display: Element,
}

impl TicketStepper {
    fn render(&self) {
        dom::set_text(&self.display, &self.counter.count().to_string());
    }

    fn decrement(&mut self) {
        if self.counter.decrement() {
            self.render();
        }
    }

    fn increment(&mut self) {
        self.counter.increment();
        self.render();
    }
}

struct PriceToggle {
    checkbox: HtmlInputElement,
    standard: Vec<Element>,
    discount: Vec<Element>,
}

impl PriceToggle {
    fn apply(&self) {
        let (show_standard, show_discount) =
            PriceMode::from_checked(self.checkbox.checked()).pair_visibility();
        for (standard, discount) in self.standard.iter().zip(&self.discount) {
            dom::set_displayed(standard, show_standard);
            dom::set_displayed(discount, show_discount);
        }
    }
}

pub struct SlideShow {
    carousel: Carousel,
    slides: Vec<Element>,
}

impl SlideShow {
    fn new(slides: Vec<Element>) -> Self {
        Self {
            carousel: Carousel::new(slides.len()),
            slides,
        }
    }

    pub fn show(&mut self, n: isize) {
        if let Some(window) = self.carousel.show(n) {
            self.render(window);
        }
    }

    pub fn advance(&mut self, delta: isize) {
        if let Some(window) = self.carousel.advance(delta) {
            self.render(window);
        }
    }

    fn render(&self, window: SlideWindow) {
        for (i, slide) in self.slides.iter().enumerate() {
            let marker = window.marker(i);
            dom::set_class(slide, ACTIVE, marker.active);
            dom::set_class(slide, BLUR, marker.blurred);
        }
    }
}

/// Periodic carousel step. Stops when [`AutoAdvance::stop`] is called or the
/// handle is dropped.
pub struct AutoAdvance {
    interval: Option<Interval>,
}

impl AutoAdvance {
    pub fn start(slideshow: Rc<RefCell<SlideShow>>, period_ms: u32) -> Self {
        let interval = Interval::new(period_ms, move || {
            slideshow.borrow_mut().advance(1);
        });
        Self {
            interval: Some(interval),
        }
    }

    pub fn stop(&mut self) {
        // Dropping the interval clears it
        if self.interval.take().is_some() {
            debug!("Carousel auto-advance stopped");
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}

pub struct PromotionsPage {
    _listeners: Vec<Listener>,
    auto_advance: AutoAdvance,
}

impl PromotionsPage {
    /// Bind the page if it carries a ticket counter. `Ok(None)` means this is
    /// some other page.
    pub fn mount() -> Result<Option<Self>, PageError> {
        let Some(display) = dom::find(TICKET_COUNT) else {
            debug!("No ticket counter on this page, skipping promotions bindings");
            return Ok(None);
        };

        let mut listeners = Vec::new();

        // Ticket stepper
        let stepper = TicketStepper {
            counter: TicketCounter::default(),
            display,
        };
        stepper.render();
        let stepper = Rc::new(RefCell::new(stepper));
        {
            let stepper = stepper.clone();
            listeners.push(Listener::new(
                dom::require(DECREMENT_BUTTON)?.as_ref(),
                "click",
                move |_| stepper.borrow_mut().decrement(),
            )?);
        }
        listeners.push(Listener::new(
            dom::require(INCREMENT_BUTTON)?.as_ref(),
            "click",
            move |_| stepper.borrow_mut().increment(),
        )?);

        // Date picker
        if let Err(e) = datepicker::attach(DATE_PICKER, &DatePickerConfig::default()) {
            warn!("Date picker unavailable: {}", e);
        }

        // Price switch
        let toggle = PriceToggle {
            checkbox: dom::require_as::<HtmlInputElement>(PRICE_CHECKBOX)?,
            standard: dom::find_all(STANDARD_PRICES),
            discount: dom::find_all(DISCOUNT_PRICES),
        };
        let pairs = paired_len(toggle.standard.len(), toggle.discount.len());
        if pairs != toggle.standard.len() || pairs != toggle.discount.len() {
            warn!(
                "Price lists differ in length ({} standard, {} discount), toggling {} pairs",
                toggle.standard.len(),
                toggle.discount.len(),
                pairs
            );
        }
        toggle.apply();
        let checkbox = toggle.checkbox.clone();
        listeners.push(Listener::new(&checkbox, "change", move |_| toggle.apply())?);

        // Carousel
        let mut slideshow = SlideShow::new(dom::find_all(SLIDES));
        if slideshow.carousel.is_empty() {
            warn!("No carousel slides found");
        }
        slideshow.show(CAROUSEL_START_INDEX as isize);
        let auto_advance =
            AutoAdvance::start(Rc::new(RefCell::new(slideshow)), CAROUSEL_ADVANCE_MS);

        info!("Promotions page mounted");
        Ok(Some(Self {
            _listeners: listeners,
            auto_advance,
        }))
    }

    pub fn teardown(mut self) {
        self.auto_advance.stop();
    }
}
