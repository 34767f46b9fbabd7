#[cfg(test)]
mod tests {
    use fieldlog::api::auth::AuthConfig;
    use fieldlog::libs::config::{Config, MonitorConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_returns_defaults_without_file(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.monitor.is_none());
        assert!(config.auth.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            monitor: Some(MonitorConfig {
                idle_threshold: 15,
                movement_threshold: 75.0,
                ..Default::default()
            }),
            auth: Some(AuthConfig {
                api_url: "https://identity.example.com".to_string(),
                auth_token: "token-1".to_string(),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        let monitor = loaded.monitor.unwrap();
        assert_eq!(monitor.idle_threshold, 15);
        assert_eq!(monitor.movement_threshold, 75.0);
        assert_eq!(loaded.auth.unwrap().api_url, "https://identity.example.com");
    }

    #[test]
    fn test_monitor_defaults_match_product_policy() {
        let monitor = MonitorConfig::default();
        assert_eq!(monitor.idle_threshold, 20);
        assert_eq!(monitor.movement_threshold, 50.0);
        assert_eq!(monitor.poll_interval, 60_000);
        assert_eq!(monitor.position_timeout, 30);
    }
}
