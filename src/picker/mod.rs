// SPDX-License-Identifier: MPL-2.0
//! Selection/download lifecycle core.
//!
//! This module is framework-agnostic: the [`Controller`] consumes user
//! intents, mutates the injected stores, and re-emits a derived
//! [`ViewModel`] that any presentation technology can observe. The Iced
//! shell in `crate::app` is just one such observer.
//!
//! ## Architecture
//!
//! ```text
//! controller  - intent handling, lifecycle transitions, pub/sub
//!     ├── lifecycle   - Idle/Requesting/Completed/Failed progression
//!     ├── overlay     - companion overlay visibility store
//!     └── view_model  - derived state re-emitted after each transition
//! ```

pub mod controller;
pub mod lifecycle;
pub mod overlay;
pub mod view_model;

pub use controller::{Controller, Effect, Intent};
pub use lifecycle::Lifecycle;
pub use overlay::OverlayStore;
pub use view_model::{ToggleAction, ViewModel};
