// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! The UI follows the Elm-style "state down, messages up" pattern: views
//! render the controller's derived [`ViewModel`](crate::picker::ViewModel)
//! and emit messages that `crate::app` translates into controller intents.
//!
//! - [`picker_bar`] - selection toggle, count, download action, and toasts
//! - [`photo_grid`] - demo catalog rendering with per-photo selection

pub mod photo_grid;
pub mod picker_bar;
