use pushkind_media::bootstrap::build_context;
use pushkind_media::settings::Settings;

mod common;

const DEFAULT_SETTINGS: &str = include_str!("../config/default.yaml");

#[test]
fn default_settings_match_migrated_asset_types() {
    let test_db = common::TestDb::new();
    let mut settings = Settings::from_yaml(DEFAULT_SETTINGS).expect("default settings parse");
    settings.database_url = test_db.path().to_string();

    let context = build_context(&settings).expect("context should build");
    assert_eq!(context.classifier.table().classify("video/mp4").as_str(), "video");
}

#[test]
fn unseeded_category_fails_startup() {
    let test_db = common::TestDb::new();
    let mut settings = Settings::from_yaml(
        "database_url: x\nmime_types:\n  - key: vector\n    content_types: [svg+xml]\n  - key: other\n",
    )
    .expect("settings parse");
    settings.database_url = test_db.path().to_string();

    assert!(build_context(&settings).is_err());
}
