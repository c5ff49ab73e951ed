// Logging setup
// 로깅 초기화 (tracing-subscriber)
use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// tracing subscriber 초기화 (프로세스당 한 번)
/// Install the global tracing subscriber. Fails if one is already installed.
pub fn init(level: &str, json: bool) -> Result<()> {
    let env_filter = EnvFilter::try_new(level)
        .with_context(|| format!("invalid log level: {}", level))?;

    let builder = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_env_filter(env_filter);

    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
    .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
