//! Ride dashboard selection state.
//!
//! Mirrors the class flags of the map pins, the detail panes, the panes
//! container and the map-image container. Rendering copies these flags onto
//! the page after every change.

/// Flags of one pin/pane pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneState {
    pub pin_active: bool,
    pub hidden: bool,
    pub collapsed: bool,
}

impl Default for PaneState {
    fn default() -> Self {
        Self {
            pin_active: false,
            hidden: true,
            collapsed: false,
        }
    }
}

/// What a pane currently looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanePhase {
    Hidden,
    Shown,
    Collapsed,
}

impl PaneState {
    pub fn phase(&self) -> PanePhase {
        if self.hidden {
            PanePhase::Hidden
        } else if self.collapsed {
            PanePhase::Collapsed
        } else {
            PanePhase::Shown
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    panes: Vec<PaneState>,
    panes_collapsed: bool,
    map_collapsed: bool,
}

impl DashboardState {
    /// All pins inactive, all panes hidden.
    pub fn new(ride_count: usize) -> Self {
        Self {
            panes: vec![PaneState::default(); ride_count],
            panes_collapsed: false,
            map_collapsed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn pane(&self, index: usize) -> Option<&PaneState> {
        self.panes.get(index)
    }

    pub fn panes(&self) -> &[PaneState] {
        &self.panes
    }

    pub fn panes_collapsed(&self) -> bool {
        self.panes_collapsed
    }

    pub fn map_collapsed(&self) -> bool {
        self.map_collapsed
    }

    pub fn active_ride(&self) -> Option<usize> {
        self.panes.iter().position(|p| p.pin_active)
    }

    /// Make ride `index` the only active one and show its pane expanded.
    ///
    /// Returns `false` without touching anything if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.panes.len() {
            return false;
        }
        self.panes_collapsed = false;
        for pane in &mut self.panes {
            pane.pin_active = false;
            pane.collapsed = false;
            pane.hidden = true;
        }
        let selected = &mut self.panes[index];
        selected.pin_active = true;
        selected.hidden = false;
        self.map_collapsed = false;
        true
    }

    /// Flip the collapse flag of the panes container, pane `index` and the map
    /// container together. Other panes keep their state.
    pub fn toggle_collapse(&mut self, index: usize) -> bool {
        let Some(pane) = self.panes.get_mut(index) else {
            return false;
        };
        pane.collapsed = !pane.collapsed;
        self.panes_collapsed = !self.panes_collapsed;
        self.map_collapsed = !self.map_collapsed;
        true
    }
}
