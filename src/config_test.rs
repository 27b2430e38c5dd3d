use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn default_config_uses_nine_items_per_page() {
    let config = CatalogConfig::default();
    assert_eq!(config.initial_visible, 9);
    assert_eq!(config.load_more_step, 9);
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.currency, "$");
}

#[test]
fn empty_toml_yields_defaults() {
    let config = CatalogConfig::from_toml_str("").unwrap();
    assert_eq!(config, CatalogConfig::default());
}

#[test]
fn step_defaults_to_initial_visible() {
    let config = CatalogConfig::from_toml_str("initial_visible = 6").unwrap();
    assert_eq!(config.initial_visible, 6);
    assert_eq!(config.load_more_step, 6);
}

#[test]
fn explicit_step_and_locale_are_read() {
    let toml = r#"
initial_visible = 9
load_more_step = 3
locale = "ru"
currency = "₽"
"#;
    let config = CatalogConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.load_more_step, 3);
    assert_eq!(config.locale, Locale::Ru);
    assert_eq!(config.currency, "₽");
}

#[test]
fn zero_page_size_is_rejected() {
    let result = CatalogConfig::from_toml_str("initial_visible = 0");
    assert!(matches!(result, Err(CatalogError::InvalidConfig(_))));
}

#[test]
fn zero_step_is_rejected() {
    let result = CatalogConfig::from_toml_str("load_more_step = 0");
    assert!(matches!(result, Err(CatalogError::InvalidConfig(_))));
}

#[test]
fn unknown_locale_is_a_parse_error() {
    let result = CatalogConfig::from_toml_str(r#"locale = "fr""#);
    assert!(matches!(result, Err(CatalogError::Toml(_))));
}

#[test]
fn load_without_path_returns_defaults() {
    let config = CatalogConfig::load(None).unwrap();
    assert_eq!(config, CatalogConfig::default());
}

#[test]
fn load_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    let config = CatalogConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config, CatalogConfig::default());
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "initial_visible = 4").unwrap();
    let config = CatalogConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.initial_visible, 4);
    assert_eq!(config.pagination(), Pagination::new(4, 4));
}
