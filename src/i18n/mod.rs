// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent system: locale
//! detection from CLI, config, or OS settings, and embedded `.ftl`
//! translation catalogs.

pub mod fluent;
