// SPDX-License-Identifier: MPL-2.0
use glitch_report::config::{self, Config};
use glitch_report::i18n::fluent::I18n;
use glitch_report::report::{Draft, FieldChange, IssueCategory, Priority, ReportPayload};
use glitch_report::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("label-email"), "Email Address");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("label-email"), "Adresse e-mail");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn every_category_and_priority_has_a_translation() {
    let i18n = I18n::default();

    for category in IssueCategory::ALL {
        assert!(
            !i18n.tr(category.label_key()).starts_with("MISSING:"),
            "missing translation for {:?}",
            category
        );
    }
    for priority in Priority::ALL {
        assert!(
            !i18n.tr(priority.label_key()).starts_with("MISSING:"),
            "missing translation for {:?}",
            priority
        );
    }
}

#[test]
fn a_filled_draft_round_trips_into_a_multipart_payload() {
    let mut draft = Draft::default();
    draft.apply(FieldChange::Email("user@company.com".into()));
    draft.apply(FieldChange::Username("nightowl".into()));
    draft.apply(FieldChange::DeviceType("iPhone 13".into()));
    draft.apply(FieldChange::BrowserInfo("Chrome 99".into()));
    draft.apply(FieldChange::Category(IssueCategory::Performance));
    draft.apply(FieldChange::Location("Login Page".into()));
    draft.apply(FieldChange::Description("Login takes thirty seconds".into()));
    draft.apply(FieldChange::StepsToReproduce("1. Log in".into()));
    draft.apply(FieldChange::Priority(Priority::Critical));
    assert!(draft.is_complete());

    let payload = ReportPayload::from_draft(&draft);
    assert_eq!(payload.category, "performance");
    assert_eq!(payload.priority, "critical");

    let form = payload.into_multipart().expect("multipart form should build");
    assert!(!form.boundary().is_empty());
}
