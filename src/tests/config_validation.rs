#[cfg(test)]
mod test {
    use clap::Parser;
    use serial_test::serial;

    use crate::config::loader::{build, Args};
    use crate::config::settings::LogFormat;
    use crate::utils::constants::{DEFAULT_API_BASE, DEV_SECRET_KEY};

    fn bare_args() -> Args {
        Args::try_parse_from(["feishu-blog"]).expect("defaults parse")
    }

    #[test]
    #[serial]
    fn defaults_are_sane_without_any_environment() {
        for var in [
            "FEISHU_APP_ID",
            "FEISHU_APP_SECRET",
            "BASE_ID",
            "TABLE_ID",
            "CACHE_TIME",
            "DEBUG",
            "PORT",
        ] {
            std::env::remove_var(var);
        }
        let settings = build(&bare_args()).expect("default settings");

        assert_eq!(settings.cache_ttl_secs, 300);
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.secret_key, DEV_SECRET_KEY);
        assert_eq!(settings.server.port, "8000");
        assert!(!settings.debug);
        assert!(!settings.has_credentials());
        assert!(!settings.has_table());
    }

    #[test]
    #[serial]
    fn environment_variables_feed_the_settings() {
        std::env::set_var("FEISHU_APP_ID", "cli_from_env");
        std::env::set_var("FEISHU_APP_SECRET", "secret_from_env");
        std::env::set_var("CACHE_TIME", "60");

        let args = Args::try_parse_from(["feishu-blog"]).expect("env parse");
        let settings = build(&args).expect("env settings");

        std::env::remove_var("FEISHU_APP_ID");
        std::env::remove_var("FEISHU_APP_SECRET");
        std::env::remove_var("CACHE_TIME");

        assert_eq!(settings.app_id, "cli_from_env");
        assert_eq!(settings.cache_ttl_secs, 60);
        assert!(settings.has_credentials());
    }

    #[test]
    #[serial]
    fn zero_ttl_is_rejected() {
        let mut args = bare_args();
        args.cache_time = 0;
        assert!(build(&args).is_err());
    }

    #[test]
    #[serial]
    fn ttl_beyond_signed_seconds_is_rejected() {
        let mut args = bare_args();
        args.cache_time = u64::MAX;
        assert!(build(&args).is_err());

        args.cache_time = i64::MAX as u64;
        assert!(build(&args).is_ok());
    }

    #[test]
    #[serial]
    fn log_format_comes_from_the_environment() {
        std::env::set_var("LOG_FORMAT", "json");
        let args = Args::try_parse_from(["feishu-blog"]).expect("env parse");
        std::env::remove_var("LOG_FORMAT");

        let settings = build(&args).expect("settings");
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(build(&bare_args()).expect("defaults").logging.format, LogFormat::Compact);
    }

    #[test]
    #[serial]
    fn nonsense_port_is_rejected() {
        let mut args = bare_args();
        args.port = "not-a-port".to_string();
        assert!(build(&args).is_err());
    }

    #[test]
    #[serial]
    fn api_base_trailing_slash_is_trimmed() {
        let mut args = bare_args();
        args.api_base = "http://127.0.0.1:9999/".to_string();
        let settings = build(&args).expect("settings");
        assert_eq!(settings.api_base, "http://127.0.0.1:9999");
    }

    #[test]
    #[serial]
    fn credential_whitespace_is_trimmed() {
        let mut args = bare_args();
        args.app_id = "  cli_padded  ".to_string();
        args.app_secret = " s ".to_string();
        let settings = build(&args).expect("settings");
        assert_eq!(settings.app_id, "cli_padded");
        assert!(settings.has_credentials());
    }
}
