//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the crate logs at `LOG_LEVEL` and
//! tower-http at info. With `LOG_DIR` pointing at an existing directory the
//! output goes to a daily rolling file instead of stdout.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
///
/// `json` switches to one JSON object per line (used in production).
pub fn init_logger(log_level: &str, json: bool, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bakery_server={log_level},tower_http=info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_dir = log_dir.map(Path::new).filter(|p| p.is_dir());

    match (file_dir, json) {
        (Some(dir), true) => {
            let appender = tracing_appender::rolling::daily(dir, "bakery-server");
            builder.json().with_writer(appender).init();
        }
        (Some(dir), false) => {
            let appender = tracing_appender::rolling::daily(dir, "bakery-server");
            builder.with_ansi(false).with_writer(appender).init();
        }
        (None, true) => builder.json().init(),
        (None, false) => builder.init(),
    }
}
