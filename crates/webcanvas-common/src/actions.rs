use serde::{Deserialize, Serialize};

use crate::types::PageId;

/// Every user-triggerable command in the application.
///
/// The URL bar, context menu, and CLI all resolve to an `Action`.
/// The app state dispatcher matches on this enum to route to subsystems.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Canvas --
    AddPage(String),
    RefreshPage(PageId),
    OpenRefreshSettings(PageId),
    ClosePage(PageId),

    // -- Window --
    Quit,

    // -- Config --
    ReloadConfig,

    // -- Noop --
    None,
}

impl Action {
    /// Human-readable label for display in the context menu.
    pub fn label(&self) -> &'static str {
        match self {
            Action::AddPage(_) => "Add Page",
            Action::RefreshPage(_) => "Refresh Now",
            Action::OpenRefreshSettings(_) => "Auto-Refresh Settings...",
            Action::ClosePage(_) => "Close Page",
            Action::Quit => "Quit",
            Action::ReloadConfig => "Reload Config",
            Action::None => "None",
        }
    }

    /// The commands offered by the context menu for a hit page item,
    /// in display order.
    pub fn context_menu_actions(page: PageId) -> Vec<Action> {
        vec![
            Action::RefreshPage(page),
            Action::OpenRefreshSettings(page),
            Action::ClosePage(page),
        ]
    }
}
