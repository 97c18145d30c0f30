use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "BOOKING_LOG_FORMAT";

/// Log output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text format with timestamp, level, target, and message
    #[default]
    Text,
    /// JSON format with structured fields: timestamp, level, target, message
    Json,
}

impl LogFormat {
    /// Parses `text` or `json`, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" => Some(LogFormat::Text),
            _ => None,
        }
    }

    /// Reads the format from `BOOKING_LOG_FORMAT` or returns the default Text format
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use booking_form::utils::logger::LogFormat;
    ///
    /// std::env::set_var("BOOKING_LOG_FORMAT", "json");
    /// assert_eq!(LogFormat::from_env_or_default(), LogFormat::Json);
    /// ```
    pub fn from_env_or_default() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|s| LogFormat::parse(&s))
            .unwrap_or_default()
    }
}

/// Initializes the global tracing subscriber.
///
/// Sets up:
/// - Environment filter from `RUST_LOG`, defaulting to `info`
/// - `fmt` layer in the format chosen by `BOOKING_LOG_FORMAT`
/// - Log-to-tracing bridge, so the `log` macros used across the crate are captured
///
/// Safe to call multiple times: when a global subscriber is already set the call
/// returns `Ok(())`.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_with(LogFormat::from_env_or_default())
}

pub fn init_logging_with(format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let text_layer = (format == LogFormat::Text).then(|| fmt::layer().with_target(true));
    let json_layer = (format == LogFormat::Json).then(|| fmt::layer().json().with_target(true));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .try_init();

    if let Err(e) = result {
        // Already initialized, typically by an earlier test
        eprintln!("Tracing subscriber already initialized: {:?}", e);
    }
    Ok(())
}
