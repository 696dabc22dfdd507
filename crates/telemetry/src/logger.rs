use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Level used when neither an explicit level nor `RUST_LOG` is given.
pub const DEFAULT_LEVEL: &str = "warn";

const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug)]
pub enum TelemetryError {
	#[error("Invalid log level: {0}")]
	InvalidLogLevel(String),

	#[error("Failed to install logger: {0}")]
	InitFailed(String),
}

/// Custom time formatter that displays time as "YYYY-MM-DD HH:MM:SS.micros"
struct CustomTimeFormat;

impl FormatTime for CustomTimeFormat {
	fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
		let now = std::time::SystemTime::now();
		let datetime: chrono::DateTime<chrono::Local> = now.into();
		write!(w, "{}", datetime.format("[%Y-%m-%d %H:%M:%S%.6f]"))
	}
}

/// Validate a log level name and return it lowercased.
pub fn parse_level(level: &str) -> Result<String, TelemetryError> {
	let level_lower = level.to_lowercase();
	if VALID_LEVELS.contains(&level_lower.as_str()) {
		Ok(level_lower)
	} else {
		Err(TelemetryError::InvalidLogLevel(level.to_string()))
	}
}

/// Initialize the logger
///
/// This sets up a stderr logger with:
/// - The given level, or `RUST_LOG`, or [`DEFAULT_LEVEL`]
/// - Timestamps in format: YYYY-MM-DD HH:MM:SS.micros
/// - `log` records bridged into the subscriber
///
/// Output goes to stderr so it never interleaves with encoded bytes on
/// stdout.
///
/// # Example
///
/// ```no_run
/// telemetry::init(Some("debug"))?;
/// # Ok::<(), telemetry::TelemetryError>(())
/// ```
pub fn init(level: Option<&str>) -> Result<(), TelemetryError> {
	let env_filter = match level {
		Some(level) => EnvFilter::new(parse_level(level)?),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
	};

	tracing_subscriber::registry()
		.with(env_filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_timer(CustomTimeFormat)
				.with_target(true)
				.with_thread_ids(false)
				.with_line_number(false)
				.with_file(false),
		)
		.try_init()
		.map_err(|e| TelemetryError::InitFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("trace", "trace")]
	#[case("debug", "debug")]
	#[case("info", "info")]
	#[case("warn", "warn")]
	#[case("error", "error")]
	#[case("TRACE", "trace")] // Test case insensitivity
	#[case("DeBuG", "debug")] // Mixed case
	fn test_valid_log_levels(#[case] level: &str, #[case] expected: &str) {
		assert_eq!(parse_level(level).unwrap(), expected);
	}

	#[rstest]
	#[case("invalid")]
	#[case("")]
	#[case("warning")] // Common mistake (should be "warn")
	#[case("critical")] // Not a standard Rust log level
	fn test_invalid_log_levels(#[case] level: &str) {
		let result = parse_level(level);
		assert!(
			matches!(result, Err(TelemetryError::InvalidLogLevel(_))),
			"Expected InvalidLogLevel for: {}",
			level
		);
	}

	#[test]
	fn test_init_rejects_invalid_level_before_installing() {
		let result = init(Some("loud"));
		assert!(matches!(result, Err(TelemetryError::InvalidLogLevel(_))));
	}
}
