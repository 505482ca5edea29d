//! Page-level grouping of the toggle controllers.

use menucart_ui::{BackToTop, CartPanel, HeaderControls, LocationModal};

/// The page's toggled surfaces, owned together so one scroll event reaches
/// every controller that listens for it.
#[derive(Debug, Default)]
pub struct PageControls {
    pub cart_panel: CartPanel,
    pub header: HeaderControls,
    pub location: LocationModal,
    pub back_to_top: BackToTop,
}

impl PageControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page scroll: closes the header panels and updates the back-to-top
    /// visibility against the new offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.header.on_scroll();
        self.back_to_top.on_scroll(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_reaches_header_and_back_to_top() {
        let mut controls = PageControls::new();
        controls.header.toggle_search();

        controls.on_scroll(400.0);
        assert!(!controls.header.search_open());
        assert!(controls.back_to_top.is_visible());

        controls.on_scroll(0.0);
        assert!(!controls.back_to_top.is_visible());
    }
}
