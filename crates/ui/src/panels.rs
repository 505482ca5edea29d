//! Panel controllers: cart sidebar, search bar + nav menu pair, location
//! modal.

use crate::toggle::PanelState;

/// Cart sidebar: toggled by the cart button, closed by its close control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartPanel {
    state: PanelState,
}

impl Default for CartPanel {
    fn default() -> Self {
        Self {
            state: PanelState::Closed,
        }
    }
}

impl CartPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Mirrors the panel's `aria-hidden` attribute: hidden when closed.
    pub fn aria_hidden(&self) -> bool {
        !self.is_open()
    }

    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }

    pub fn close(&mut self) {
        self.state = PanelState::Closed;
    }
}

/// Search bar and nav menu pair.
///
/// Opening either closes the other; any page scroll closes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderControls {
    search: PanelState,
    nav: PanelState,
}

impl Default for HeaderControls {
    fn default() -> Self {
        Self {
            search: PanelState::Closed,
            nav: PanelState::Closed,
        }
    }
}

impl HeaderControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_open(&self) -> bool {
        self.search.is_open()
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn search_aria_hidden(&self) -> bool {
        !self.search_open()
    }

    pub fn toggle_search(&mut self) {
        self.search = self.search.toggled();
        self.nav = PanelState::Closed;
    }

    pub fn toggle_nav(&mut self) {
        self.nav = self.nav.toggled();
        self.search = PanelState::Closed;
    }

    pub fn on_scroll(&mut self) {
        self.search = PanelState::Closed;
        self.nav = PanelState::Closed;
    }
}

/// Where a click landed inside the open location modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed backdrop around the dialog.
    Backdrop,
    /// The dialog surface itself.
    Content,
}

/// Location modal: opened by the location button, closed by its close
/// control or a click on the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationModal {
    state: PanelState,
}

impl Default for LocationModal {
    fn default() -> Self {
        Self {
            state: PanelState::Closed,
        }
    }
}

impl LocationModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn aria_hidden(&self) -> bool {
        !self.is_open()
    }

    pub fn open(&mut self) {
        self.state = PanelState::Open;
    }

    pub fn close(&mut self) {
        self.state = PanelState::Closed;
    }

    pub fn on_click(&mut self, target: ModalClick) {
        if target == ModalClick::Backdrop {
            self.close();
        }
    }
}
