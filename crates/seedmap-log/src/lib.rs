//! Structured logging for seedmap.
//!
//! Console output with uptime and targets, plus a JSON log file in debug
//! builds. The level comes from `RUST_LOG`, then the config, then `info`.
//! Records emitted through the `log` facade are bridged into `tracing`.

use std::fs::File;
use std::path::{Path, PathBuf};

use seedmap_config::Config;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log inside the log directory.
pub const LOG_FILE: &str = "seedmap.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - Directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether to write the JSON log at all
/// * `config` - Source of the `debug.log_level` filter
///
/// A log directory that cannot be created is skipped silently; console
/// logging still comes up.
///
/// # Panics
///
/// If a global subscriber is already installed.
///
/// # Examples
///
/// ```no_run
/// use seedmap_config::Config;
/// use seedmap_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = File::create(log_file_path(log_dir))
    {
        subscriber.with(json_file_layer(log_file)).init();
        return;
    }

    subscriber.init();
}

/// The filter string for a config: its `debug.log_level`, or
/// [`DEFAULT_FILTER`] when absent or blank.
pub fn filter_directive(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Where the JSON log goes inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE)
}

/// One JSON object per event, no ANSI colors, uptime timestamps.
fn json_file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime())
        .json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_without_config() {
        assert_eq!(filter_directive(None), "info");
    }

    #[test]
    fn test_config_level_wins() {
        let mut config = Config::default();
        config.debug.log_level = "debug,seedmap_render=trace".to_string();
        assert_eq!(filter_directive(Some(&config)), "debug,seedmap_render=trace");
    }

    #[test]
    fn test_blank_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(filter_directive(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_filter_directives_parse() {
        for directive in [
            "info",
            "warn,seedmap_render=debug",
            "error,seedmap_world=trace,seedmap_config=info",
        ] {
            let filter = EnvFilter::try_new(directive);
            assert!(filter.is_ok(), "failed to parse {directive}");
        }
    }

    #[test]
    fn test_log_file_path() {
        let path = log_file_path(Path::new("/tmp/seedmap-logs"));
        assert_eq!(path.file_name().unwrap(), LOG_FILE);
    }

    #[test]
    fn test_json_layer_writes_structured_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_path(dir.path());
        let file = File::create(&path).unwrap();

        let subscriber = tracing_subscriber::registry().with(json_file_layer(file));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(width = 64, height = 32, "rendered biome map");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().expect("one event logged");
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["level"], "INFO");
        assert_eq!(event["fields"]["message"], "rendered biome map");
        assert_eq!(event["fields"]["width"], 64);
        assert!(contents.chars().all(|c| c != '\u{1b}'), "no ANSI escapes");
    }
}
