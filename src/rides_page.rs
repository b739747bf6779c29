//! Rides page: status and wait-time texts, map pins and detail panes.

use crate::dom::{self, Listener, PageError};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use themepark_web::config::classes::{ACTIVE, COLLAPSE, HIDE, STATUS_CLOSED, STATUS_OPEN};
use themepark_web::config::rides::*;
use themepark_web::{default_rides, default_schedule, prepare_rides, DashboardState, Ride};
use web_sys::Element;

fn render_ride_status(rides: &[Ride], status_texts: &[Element], wait_texts: &[Element]) {
    for ((ride, status_el), wait_el) in rides.iter().zip(status_texts).zip(wait_texts) {
        dom::set_text(status_el, ride.status.label());
        for class in [STATUS_OPEN, STATUS_CLOSED] {
            dom::set_class(status_el, class, class == ride.status.css_class());
        }
        dom::set_text(wait_el, &ride.wait_label());
    }
}

struct DashboardView {
    state: DashboardState,
    panes_container: Element,
    map_container: Element,
    panes: Vec<Element>,
    pins: Vec<Element>,
}

impl DashboardView {
    fn render(&self) {
        dom::set_class(&self.panes_container, COLLAPSE, self.state.panes_collapsed());
        dom::set_class(&self.map_container, COLLAPSE, self.state.map_collapsed());
        let elements = self.panes.iter().zip(&self.pins);
        for (pane_state, (pane, pin)) in self.state.panes().iter().zip(elements) {
            dom::set_class(pane, HIDE, pane_state.hidden);
            dom::set_class(pane, COLLAPSE, pane_state.collapsed);
            dom::set_class(pin, ACTIVE, pane_state.pin_active);
        }
    }

    fn select(&mut self, index: usize) {
        if self.state.select(index) {
            debug!("Selected ride pane {}", index);
            self.render();
        } else {
            warn!("Ignoring selection of unknown ride pane {}", index);
        }
    }

    fn toggle_collapse(&mut self, index: usize) {
        if self.state.toggle_collapse(index) {
            self.render();
        } else {
            warn!("Ignoring collapse of unknown ride pane {}", index);
        }
    }
}

pub struct RidesPage {
    _listeners: Vec<Listener>,
}

impl RidesPage {
    /// Bind the page if it carries the ride panes container. `Ok(None)` means
    /// this is some other page.
    pub fn mount() -> Result<Option<Self>, PageError> {
        let Some(panes_container) = dom::find(PANES_CONTAINER) else {
            debug!("No ride panes on this page, skipping rides bindings");
            return Ok(None);
        };
        let map_container = dom::require(MAP_CONTAINER)?;

        let rides = prepare_rides(default_rides()?, &default_schedule()?, &mut rand::rng())?;

        let status_texts = dom::find_all(STATUS_TEXTS);
        let wait_texts = dom::find_all(WAIT_TEXTS);
        if status_texts.len() != rides.len() || wait_texts.len() != rides.len() {
            warn!(
                "Catalog has {} rides but page has {} status and {} wait texts",
                rides.len(),
                status_texts.len(),
                wait_texts.len()
            );
        }
        render_ride_status(&rides, &status_texts, &wait_texts);

        let panes = dom::find_all(PANES);
        let pins = dom::find_all(PINS);
        let collapse_buttons = dom::find_all(COLLAPSE_BUTTONS);
        let bound = panes.len().min(pins.len());
        if panes.len() != pins.len() || collapse_buttons.len() != panes.len() {
            warn!(
                "Page has {} panes, {} pins and {} collapse buttons; binding {} rides",
                panes.len(),
                pins.len(),
                collapse_buttons.len(),
                bound
            );
        }

        let view = DashboardView {
            state: DashboardState::new(bound),
            panes_container,
            map_container,
            panes,
            pins,
        };
        view.render();

        let pins: Vec<Element> = view.pins.iter().take(bound).cloned().collect();
        let view = Rc::new(RefCell::new(view));

        let mut listeners = Vec::with_capacity(bound * 2);
        for (index, pin) in pins.iter().enumerate() {
            let view = view.clone();
            listeners.push(Listener::new(pin, "click", move |_| {
                view.borrow_mut().select(index)
            })?);
        }
        for (index, button) in collapse_buttons.iter().take(bound).enumerate() {
            let view = view.clone();
            listeners.push(Listener::new(button, "click", move |_| {
                view.borrow_mut().toggle_collapse(index)
            })?);
        }

        info!("Rides page mounted with {} rides", rides.len());
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
