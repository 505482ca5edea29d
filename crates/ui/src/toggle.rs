use serde::{Deserialize, Serialize};

/// Exactly one of open/closed at a time; no implicit class-based state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    Open,
    Closed,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            PanelState::Open => PanelState::Closed,
            PanelState::Closed => PanelState::Open,
        }
    }
}
