//! Sidebar view state.

use serde::{Deserialize, Serialize};

use crate::history::ApiHistory;

/// Which view the sidebar currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SidebarView {
    /// The five panel buttons.
    #[default]
    ButtonMenu,
    /// Endpoint history with a back control.
    HistoryList,
}

/// Everything the sidebar renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidebarState {
    /// Current view.
    pub view: SidebarView,
    /// Endpoint history.
    pub history: ApiHistory,
}

impl SidebarState {
    /// Initial state: button menu, empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to the history list.
    pub fn show_history(&mut self) {
        self.view = SidebarView::HistoryList;
    }

    /// Switches back to the button menu.
    pub fn show_menu(&mut self) {
        self.view = SidebarView::ButtonMenu;
    }

    /// Returns true when the history list is shown.
    #[must_use]
    pub fn is_showing_history(&self) -> bool {
        self.view == SidebarView::HistoryList
    }
}
