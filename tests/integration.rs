// SPDX-License-Identifier: MPL-2.0
use iced_notify::config::{self, Config};
use iced_notify::i18n::I18n;
use iced_notify::ui::gallery::{factory, Variant};
use iced_notify::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
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

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn every_catalog_label_is_translated() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    for variant in Variant::ALL {
        let label = i18n.tr(variant.display_label_key());
        assert!(
            !label.starts_with("MISSING:"),
            "missing label for {variant:?}"
        );
    }
}

#[test]
fn every_factory_text_key_is_translated() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    for variant in Variant::ALL {
        let notification = factory::build(variant);

        let message = i18n.tr(notification.message_key());
        assert!(
            !message.starts_with("MISSING:"),
            "missing message for {variant:?}"
        );

        if let Some(title_key) = notification.title_key() {
            assert!(
                !i18n.tr(title_key).starts_with("MISSING:"),
                "missing title for {variant:?}"
            );
        }
    }
}

#[test]
fn french_catalog_is_complete() {
    let i18n = I18n::new(Some("fr".to_string()), &Config::default());
    for variant in Variant::ALL {
        let label = i18n.tr(variant.display_label_key());
        assert!(
            !label.starts_with("MISSING:"),
            "missing french label for {variant:?}"
        );
    }
}

#[test]
fn theme_mode_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
        let config = Config {
            language: None,
            theme_mode: mode,
        };
        config::save_to_path(&config, &path).expect("save");
        let loaded = config::load_from_path(&path).expect("load");
        assert_eq!(loaded.theme_mode, mode);
    }
}
