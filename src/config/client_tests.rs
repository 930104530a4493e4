//! Tests for the client configuration record and environments.

use std::time::Duration;

use super::*;
use crate::validation::ValidationMode;

fn config() -> ClientConfig {
    ClientConfig::new("shop.example.com", "auth-key", Environment::Sandbox)
}

mod endpoints {
    use super::*;

    #[test]
    fn sandbox_uses_one_base_for_both() {
        let endpoints = Endpoints::resolve(Environment::Sandbox, None).unwrap();

        assert_eq!(endpoints.api.as_str(), "https://sandbox.riskified.com/");
        assert_eq!(endpoints.sync_analyze, endpoints.api);
    }

    #[test]
    fn production_has_separate_sync_base() {
        let endpoints = Endpoints::resolve(Environment::Production, None).unwrap();

        assert_eq!(endpoints.api.as_str(), "https://wh.riskified.com/");
        assert_eq!(endpoints.sync_analyze.as_str(), "https://wh-sync.riskified.com/");
    }

    #[test]
    fn debug_defaults_to_localhost() {
        let endpoints = Endpoints::resolve(Environment::Debug, None).unwrap();

        assert_eq!(endpoints.api.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn debug_host_is_ignored_outside_debug() {
        let endpoints =
            Endpoints::resolve(Environment::Sandbox, Some("http://localhost:9999")).unwrap();

        assert_eq!(endpoints.api.as_str(), "https://sandbox.riskified.com/");
    }

    #[test]
    fn invalid_debug_host_is_rejected() {
        let result = Endpoints::resolve(Environment::Debug, Some("not a url"));

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_base_debug_host_is_rejected() {
        let result = Endpoints::resolve(Environment::Debug, Some("mailto:dev@example.com"));

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}

mod environment {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("DEBUG".parse::<Environment>().unwrap(), Environment::Debug);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn rejects_unknown_name() {
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(ConfigError::InvalidEnvironment { .. })
        ));
    }

    #[test]
    fn default_is_sandbox() {
        assert_eq!(Environment::default(), Environment::Sandbox);
    }
}

mod client_config {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = config();

        assert_eq!(config.validation, ValidationMode::All);
        assert_eq!(config.connect_timeout, defaults::connect_timeout());
        assert_eq!(config.request_timeout, defaults::request_timeout());
        assert!(config.proxy.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_set_fields() {
        let config = config()
            .with_validation(ValidationMode::None)
            .with_connect_timeout(Duration::from_millis(100))
            .with_request_timeout(Duration::from_millis(200))
            .with_proxy(ProxyConfig::new("proxy.internal", 3128));

        assert_eq!(config.validation, ValidationMode::None);
        assert_eq!(config.connect_timeout, Duration::from_millis(100));
        assert_eq!(config.request_timeout, Duration::from_millis(200));
        assert_eq!(config.proxy.unwrap().port, 3128);
    }

    #[test]
    fn empty_shop_url_is_missing() {
        let config = ClientConfig::new("  ", "key", Environment::Sandbox);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRequired { field: "shop_url", .. })
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = config().with_request_timeout(Duration::ZERO);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDuration {
                field: "request_timeout",
                ..
            })
        ));
    }

    #[test]
    fn bad_proxy_host_is_rejected() {
        let config = config().with_proxy(ProxyConfig::new("bad host", 8080));

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProxy { .. })
        ));
    }

    #[test]
    fn proxy_url_has_http_scheme() {
        let proxy = ProxyConfig::new("proxy.internal", 3128).with_credentials("user", "pass");

        assert_eq!(proxy.url().unwrap().as_str(), "http://proxy.internal:3128/");
        assert_eq!(proxy.username.as_deref(), Some("user"));
    }

    #[test]
    fn ipv6_proxy_host_is_bracketed() {
        let proxy = ProxyConfig::new("::1", 3128);

        assert_eq!(proxy.url().unwrap().as_str(), "http://[::1]:3128/");
        assert!(config().with_proxy(proxy).validate().is_ok());
    }

    #[test]
    fn ipv4_proxy_host_is_left_bare() {
        let proxy = ProxyConfig::new("10.0.0.5", 8080);

        assert_eq!(proxy.url().unwrap().as_str(), "http://10.0.0.5:8080/");
    }

    #[test]
    fn secrets_are_not_displayed() {
        let config = ClientConfig::new("shop.example.com", "very-secret", Environment::Sandbox)
            .with_proxy(ProxyConfig::new("p", 1).with_credentials("u", "proxy-secret"));

        let display = config.to_string();
        let debug = format!("{config:?}");

        for text in [display, debug] {
            assert!(!text.contains("very-secret"), "{text}");
            assert!(!text.contains("proxy-secret"), "{text}");
        }
    }
}
