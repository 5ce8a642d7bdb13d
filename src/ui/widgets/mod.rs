// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod spinner;

pub use spinner::ProcessingSpinner;
