// SPDX-License-Identifier: MPL-2.0
//! Report draft model: the in-progress, not-yet-submitted issue record.
//!
//! The draft is mutated one field at a time through [`FieldChange`], which
//! keeps a single update operation between the form widgets and the state
//! holder. Presence validation lives here too; it is the only validation the
//! form performs.

pub mod payload;

pub use payload::ReportPayload;

use crate::media::Attachment;

/// Categories a reported issue can fall into.
///
/// `wire_name` values match the production endpoint contract and must not be
/// renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueCategory {
    #[default]
    Visual,
    Functional,
    Performance,
    Crash,
    Security,
    Data,
    Other,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 7] = [
        IssueCategory::Visual,
        IssueCategory::Functional,
        IssueCategory::Performance,
        IssueCategory::Crash,
        IssueCategory::Security,
        IssueCategory::Data,
        IssueCategory::Other,
    ];

    /// Stable identifier used in the multipart payload.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            IssueCategory::Visual => "visual",
            IssueCategory::Functional => "functional",
            IssueCategory::Performance => "performance",
            IssueCategory::Crash => "crash",
            IssueCategory::Security => "security",
            IssueCategory::Data => "data",
            IssueCategory::Other => "other",
        }
    }

    /// Returns the i18n key for this category's display label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            IssueCategory::Visual => "category-visual",
            IssueCategory::Functional => "category-functional",
            IssueCategory::Performance => "category-performance",
            IssueCategory::Crash => "category-crash",
            IssueCategory::Security => "category-security",
            IssueCategory::Data => "category-data",
            IssueCategory::Other => "category-other",
        }
    }
}

/// Priority levels, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Stable identifier used in the multipart payload.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Returns the i18n key for this priority's display label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Priority::Low => "priority-low",
            Priority::Medium => "priority-medium",
            Priority::High => "priority-high",
            Priority::Critical => "priority-critical",
        }
    }
}

/// Required fields of the draft, used to report what is still missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Email,
    Username,
    DeviceType,
    BrowserInfo,
    Location,
    Description,
    StepsToReproduce,
}

impl RequiredField {
    pub const ALL: [RequiredField; 7] = [
        RequiredField::Email,
        RequiredField::Username,
        RequiredField::DeviceType,
        RequiredField::BrowserInfo,
        RequiredField::Location,
        RequiredField::Description,
        RequiredField::StepsToReproduce,
    ];
}

/// A single-field mutation of the draft.
#[derive(Debug, Clone)]
pub enum FieldChange {
    Email(String),
    Username(String),
    DeviceType(String),
    BrowserInfo(String),
    Category(IssueCategory),
    Location(String),
    Description(String),
    StepsToReproduce(String),
    Priority(Priority),
}

/// The in-progress report record.
///
/// All fields except the attachment are required for submission; category and
/// priority always hold a value, so presence validation only inspects the
/// text fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub email: String,
    pub username: String,
    pub device_type: String,
    pub browser_info: String,
    pub category: IssueCategory,
    pub location: String,
    pub description: String,
    pub steps_to_reproduce: String,
    pub attachment: Option<Attachment>,
    pub priority: Priority,
}

impl Draft {
    /// Applies a single field change, leaving every other field untouched.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Email(value) => self.email = value,
            FieldChange::Username(value) => self.username = value,
            FieldChange::DeviceType(value) => self.device_type = value,
            FieldChange::BrowserInfo(value) => self.browser_info = value,
            FieldChange::Category(value) => self.category = value,
            FieldChange::Location(value) => self.location = value,
            FieldChange::Description(value) => self.description = value,
            FieldChange::StepsToReproduce(value) => self.steps_to_reproduce = value,
            FieldChange::Priority(value) => self.priority = value,
        }
    }

    /// Lists required fields whose values are still empty.
    ///
    /// Whitespace-only input counts as empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        for field in RequiredField::ALL {
            let value = match field {
                RequiredField::Email => &self.email,
                RequiredField::Username => &self.username,
                RequiredField::DeviceType => &self.device_type,
                RequiredField::BrowserInfo => &self.browser_info,
                RequiredField::Location => &self.location,
                RequiredField::Description => &self.description,
                RequiredField::StepsToReproduce => &self.steps_to_reproduce,
            };
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        missing
    }

    /// Returns `true` when every required field holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Restores every field to its default value.
    pub fn reset(&mut self) {
        *self = Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn complete_draft() -> Draft {
        let mut draft = Draft::default();
        draft.apply(FieldChange::Email("user@company.com".into()));
        draft.apply(FieldChange::Username("nightowl".into()));
        draft.apply(FieldChange::DeviceType("Dell XPS 15".into()));
        draft.apply(FieldChange::BrowserInfo("Firefox 95".into()));
        draft.apply(FieldChange::Location("Dashboard".into()));
        draft.apply(FieldChange::Description("The graph renders upside down".into()));
        draft.apply(FieldChange::StepsToReproduce("1. Open dashboard".into()));
        draft
    }

    #[test]
    fn default_draft_has_expected_defaults() {
        let draft = Draft::default();
        assert!(draft.email.is_empty());
        assert_eq!(draft.category, IssueCategory::Visual);
        assert_eq!(draft.priority, Priority::Medium);
        assert!(draft.attachment.is_none());
    }

    #[test]
    fn apply_updates_only_the_named_field() {
        let mut draft = complete_draft();
        let before = draft.clone();

        draft.apply(FieldChange::Email("other@company.com".into()));

        assert_eq!(draft.email, "other@company.com");
        assert_eq!(draft.username, before.username);
        assert_eq!(draft.device_type, before.device_type);
        assert_eq!(draft.browser_info, before.browser_info);
        assert_eq!(draft.category, before.category);
        assert_eq!(draft.location, before.location);
        assert_eq!(draft.description, before.description);
        assert_eq!(draft.steps_to_reproduce, before.steps_to_reproduce);
        assert_eq!(draft.priority, before.priority);
    }

    #[test]
    fn last_write_wins_per_field() {
        let mut draft = Draft::default();
        draft.apply(FieldChange::Username("first".into()));
        draft.apply(FieldChange::Location("Login Page".into()));
        draft.apply(FieldChange::Username("second".into()));

        assert_eq!(draft.username, "second");
        assert_eq!(draft.location, "Login Page");
    }

    #[test]
    fn missing_fields_lists_empty_required_fields() {
        let mut draft = complete_draft();
        draft.apply(FieldChange::BrowserInfo("   ".into()));
        draft.apply(FieldChange::Description(String::new()));

        let missing = draft.missing_fields();
        assert_eq!(
            missing,
            vec![RequiredField::BrowserInfo, RequiredField::Description]
        );
        assert!(!draft.is_complete());
    }

    #[test]
    fn complete_draft_passes_validation_without_attachment() {
        let draft = complete_draft();
        assert!(draft.attachment.is_none());
        assert!(draft.is_complete());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut draft = complete_draft();
        draft.apply(FieldChange::Priority(Priority::Critical));
        draft.reset();
        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn category_wire_names_are_stable() {
        assert_eq!(IssueCategory::ALL.len(), 7);
        assert_eq!(IssueCategory::Visual.wire_name(), "visual");
        assert_eq!(IssueCategory::Security.wire_name(), "security");
        assert_eq!(IssueCategory::Other.label_key(), "category-other");
    }

    #[test]
    fn priority_orders_low_to_critical() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Critical);
        assert_eq!(Priority::Critical.wire_name(), "critical");
    }
}
