//! Process-level tracing output, configured from `LEAGUE_LOG`.

use std::sync::Once;

static INIT: Once = Once::new();

pub const LOG_ENV: &str = "LEAGUE_LOG";

fn parse_level(value: Option<&str>) -> tracing::Level {
    match value.unwrap_or("warn").to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    }
}

/// Install a stderr subscriber so log lines never interleave with the menu on
/// stdout. Only the first call has any effect.
pub fn init() {
    INIT.call_once(|| {
        let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::parse_level;

    #[test]
    pub fn test_parse_level() {
        assert_eq!(parse_level(None), tracing::Level::WARN);
        assert_eq!(parse_level(Some("DEBUG")), tracing::Level::DEBUG);
        assert_eq!(parse_level(Some("info")), tracing::Level::INFO);
        assert_eq!(parse_level(Some("bogus")), tracing::Level::WARN);
    }
}
