use super::{Settings, load_config};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    assert!(settings.server.allowed_origin.is_none());
}

#[test]
#[serial]
fn test_env_overrides_defaults() {
    temp_env::with_vars(
        [
            ("SERVER__PORT", Some("9000")),
            ("SERVER__ALLOWED_ORIGIN", Some("http://localhost:4200")),
        ],
        || {
            let settings = load_config().expect("load config");
            assert_eq!(settings.server.port, 9000);
            assert_eq!(
                settings.server.allowed_origin.as_deref(),
                Some("http://localhost:4200")
            );
            // Untouched values fall back to defaults.
            assert_eq!(settings.server.host, "127.0.0.1");
        },
    );
}

#[test]
#[serial]
fn test_config_file_overrides_defaults() {
    // Run from a temporary directory so load_config picks up
    // config/default.toml from there.
    let tmp = TempDir::new().expect("create tempdir");
    let orig = env::current_dir().expect("current_dir");
    env::set_current_dir(tmp.path()).expect("set current dir");

    fs::create_dir_all("config").expect("create config dir");
    let toml = r#"
        [server]
        host = "0.0.0.0"
        port = 9000
        allowed_origin = "http://localhost:5173"
    "#;
    fs::write("config/default.toml", toml).expect("write config file");

    let loaded = load_config();
    env::set_current_dir(orig).expect("restore current dir");

    let settings = loaded.expect("load config");
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 9000);
    assert_eq!(
        settings.server.allowed_origin.as_deref(),
        Some("http://localhost:5173")
    );
}
