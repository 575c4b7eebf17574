use nestora_config::{Config, ConfigManager, Theme};
use std::fs;
use tempfile::tempdir;

#[test]
fn default_config_uses_dollar_and_iconic_theme() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_symbol, "$");
    assert_eq!(cfg.theme, Theme::Iconic);
    assert!(cfg.ui_color_enabled);
    assert!(cfg.data_file.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");

    let mut cfg = Config::default();
    cfg.set("currency_symbol", "€").expect("set symbol");
    cfg.set("theme", "plain").expect("set theme");
    cfg.set("accessibility.plain_output", "yes").expect("set plain output");

    manager.save(&cfg).expect("save config");
    assert_eq!(manager.config_path(), dir.path().join("config").join("config.json"));
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config").join("config.json.tmp").exists());
}

#[test]
fn config_manager_missing_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_fills_missing_fields_and_tolerates_unknown_theme() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "theme": "sparkly", "currency_symbol": "£" }"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load partial config");
    assert_eq!(loaded.theme, Theme::Iconic);
    assert_eq!(loaded.currency_symbol, "£");
    assert!(loaded.ui_color_enabled);
    assert!(!loaded.accessibility.high_contrast);
}
