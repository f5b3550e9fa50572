// SPDX-License-Identifier: MPL-2.0
//! Derived view model handed to the presentation layer.

use super::lifecycle::Lifecycle;

/// The bulk action offered by the selection toggle.
///
/// Derived from the two counts on every read, never stored: select-all is
/// offered while anything remains unselected, deselect-all once the whole
/// catalog is selected. Repeated invocations therefore always route to a
/// meaningful action instead of looping on a stale flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    SelectAll,
    DeselectAll,
}

impl ToggleAction {
    /// Derives the offered action from the current counts.
    #[must_use]
    pub fn derive(selected: usize, selectable: usize) -> Self {
        if selected < selectable {
            ToggleAction::SelectAll
        } else {
            ToggleAction::DeselectAll
        }
    }
}

/// Snapshot of controller state re-emitted after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Photos currently selected.
    pub selected_count: usize,
    /// Photos available in the catalog.
    pub selectable_count: usize,
    /// Current download lifecycle state.
    pub lifecycle: Lifecycle,
    /// Whether the download action should be enabled.
    pub can_download: bool,
    /// Bulk action the selection toggle should offer next.
    pub toggle_action: ToggleAction,
    /// Whether the completion/failure notice is showing.
    pub toast_visible: bool,
    /// Detail message carried while the lifecycle is `Failed`.
    pub failure_detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_offers_select_all_while_partially_selected() {
        assert_eq!(ToggleAction::derive(0, 5), ToggleAction::SelectAll);
        assert_eq!(ToggleAction::derive(4, 5), ToggleAction::SelectAll);
    }

    #[test]
    fn toggle_offers_deselect_all_once_everything_is_selected() {
        assert_eq!(ToggleAction::derive(5, 5), ToggleAction::DeselectAll);
    }

    #[test]
    fn empty_catalog_offers_deselect_all() {
        // Both counts are zero, so the `<` comparison routes to deselect-all.
        // The action is a no-op on an empty catalog either way.
        assert_eq!(ToggleAction::derive(0, 0), ToggleAction::DeselectAll);
    }
}
