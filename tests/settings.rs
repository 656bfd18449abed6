use std::io::Write;

use pushkind_media::settings::Settings;

const DEFAULT_SETTINGS: &str = include_str!("../config/default.yaml");

#[test]
fn environment_overrides_file_settings() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(DEFAULT_SETTINGS.as_bytes())
        .expect("Failed to write settings");
    let path = file.path().to_str().expect("utf-8 path");

    let from_file = Settings::load(path).expect("should load settings");
    assert_eq!(from_file.database_url, "media.db");

    // Only test in this binary, so no other thread reads the environment.
    unsafe { std::env::set_var("MEDIA_DATABASE_URL", "override.db") };
    let overridden = Settings::load(path);
    unsafe { std::env::remove_var("MEDIA_DATABASE_URL") };

    let overridden = overridden.expect("should load settings");
    assert_eq!(overridden.database_url, "override.db");
    assert_eq!(overridden.fallback_category, "other");
    assert_eq!(overridden.mime_types.len(), from_file.mime_types.len());
}
