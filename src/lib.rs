// SPDX-License-Identifier: MPL-2.0
//! `glitch_report` is a stylized system-issue report form built with the
//! Iced GUI framework.
//!
//! It collects a structured report draft (contact info, environment strings,
//! categorized issue type and priority, free text, an optional attachment
//! with inline image preview), validates field presence, and runs a simulated
//! submission round trip behind an injectable transport port. It also
//! demonstrates internationalization with Fluent and user preference
//! management.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod report;
pub mod submission;
pub mod ui;
