// SPDX-License-Identifier: MPL-2.0
//! Visibility store for the companion gallery overlay.

/// Whether the companion overlay surface is shown.
///
/// The overlay starts visible and is hidden as a side effect of a download
/// queue being accepted. Hiding is unconditional and has no error mode.
#[derive(Debug, Clone)]
pub struct OverlayStore {
    visible: bool,
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl OverlayStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hides the overlay, regardless of its current state.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}
