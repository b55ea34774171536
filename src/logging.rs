//! Logging initialization
//!
//! Logs go to stderr so that plan output on stdout stays clean.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter directive for the configured level, raised by `-v` flags
#[must_use]
pub fn filter_directive(config: &LoggingConfig, verbose: u8) -> String {
    match verbose {
        0 => format!("tripwizard={},warn", config.level),
        1 => "tripwizard=debug,warn".to_string(),
        2 => "tripwizard=trace,info".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize tracing for the application
pub fn init(config: &LoggingConfig, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3);

    if config.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    debug!("tripwizard started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "tripwizard=info,warn")]
    #[case(1, "tripwizard=debug,warn")]
    #[case(2, "tripwizard=trace,info")]
    #[case(5, "trace")]
    fn test_filter_directive(#[case] verbose: u8, #[case] expected: &str) {
        assert_eq!(filter_directive(&LoggingConfig::default(), verbose), expected);
    }

    #[test]
    fn test_configured_level_used_without_flags() {
        let config = LoggingConfig {
            level: "error".to_string(),
            format: "json".to_string(),
        };
        assert_eq!(filter_directive(&config, 0), "tripwizard=error,warn");
    }
}
