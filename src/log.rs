use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    Layer as _, filter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use crate::config::{LOG_DIR, LOG_FILE};

pub fn init_log(verbose: bool) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let crate_filter = filter::Targets::new().with_targets([("pitchside", Level::DEBUG)]);
    // the terminal carries command output, so only warnings go there unless asked otherwise
    let terminal_level = if verbose { Level::DEBUG } else { Level::WARN };
    let terminal_filter = filter::Targets::new().with_targets([("pitchside", terminal_level)]);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(terminal_filter);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(crate_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
