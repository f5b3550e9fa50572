// SPDX-License-Identifier: MPL-2.0
//! Download lifecycle states.

/// Progression of a single download attempt.
///
/// Exactly one lifecycle value exists per controller; a new attempt can
/// only start from [`Lifecycle::Idle`]. `Completed` is terminal until the
/// picker flow is re-entered, which happens outside this crate. `Failed`
/// is recoverable: dismissing the failure notice returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// No download in flight; selection can still change freely.
    #[default]
    Idle,
    /// The enqueue call is outstanding. No second request may start.
    Requesting,
    /// The download queue was accepted by the execution service.
    Completed,
    /// The execution service rejected the enqueue request.
    Failed,
}

impl Lifecycle {
    /// Whether the enqueue call is currently outstanding.
    #[must_use]
    pub fn is_requesting(&self) -> bool {
        matches!(self, Lifecycle::Requesting)
    }

    /// Whether this attempt reached a terminal or recoverable end state.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Lifecycle::Completed | Lifecycle::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lifecycle_is_idle() {
        assert_eq!(Lifecycle::default(), Lifecycle::Idle);
    }

    #[test]
    fn only_requesting_reports_in_flight() {
        assert!(Lifecycle::Requesting.is_requesting());
        assert!(!Lifecycle::Idle.is_requesting());
        assert!(!Lifecycle::Completed.is_requesting());
        assert!(!Lifecycle::Failed.is_requesting());
    }

    #[test]
    fn completed_and_failed_are_settled() {
        assert!(Lifecycle::Completed.is_settled());
        assert!(Lifecycle::Failed.is_settled());
        assert!(!Lifecycle::Idle.is_settled());
        assert!(!Lifecycle::Requesting.is_settled());
    }
}
