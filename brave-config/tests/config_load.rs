use brave_config::{API_KEY_ENV, ConfigError, SearchConfigLoader};
use serial_test::serial;

#[test]
#[serial]
fn reads_key_from_process_environment() {
    temp_env::with_var(API_KEY_ENV, Some("from-env"), || {
        let config = SearchConfigLoader::new().load().expect("load config");
        assert_eq!(config.require_api_key().unwrap(), "from-env");
    });
}

#[test]
#[serial]
fn unset_key_is_a_missing_key_error() {
    temp_env::with_var_unset(API_KEY_ENV, || {
        let config = SearchConfigLoader::new().load().expect("load config");
        assert!(matches!(
            config.require_api_key(),
            Err(ConfigError::MissingApiKey)
        ));
    });
}
