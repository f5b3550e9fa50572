// SPDX-License-Identifier: MPL-2.0
//! `iced_picker` is a small photo-selection and download-queue control built
//! with the Iced GUI framework.
//!
//! The crate separates the selection/download lifecycle core (stores and the
//! [`picker::Controller`] state machine) from the Iced presentation shell,
//! and demonstrates internationalization with Fluent and user preference
//! management.

pub mod app;
pub mod catalog;
pub mod config;
pub mod download;
pub mod error;
pub mod i18n;
pub mod picker;
pub mod ui;
