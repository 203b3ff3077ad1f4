use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file base path.
pub const LOG_ENV_VAR: &str = "REELCRAFT_LOG";

/// Initialize tracing with optional file output.
///
/// Nothing is logged unless `REELCRAFT_LOG` names a file path; writing to the
/// terminal would corrupt the TUI. Each run gets its own file,
/// `{path}.{timestamp}.{pid}`. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(LOG_ENV_VAR) else {
        return;
    };
    if log_path.trim().is_empty() {
        return;
    }

    let unique_path = unique_log_path(&log_path);
    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, std::process::id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_pid() {
        let path = unique_log_path("/tmp/reelcraft.log");
        assert!(path.starts_with("/tmp/reelcraft.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
