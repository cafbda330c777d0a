use log::{Level, LevelFilter};
use std::io::Write;

/// Initialize the logger with a cargo-style formatter.
///
/// Defaults to `warn`; `RUST_LOG` overrides it (e.g. `RUST_LOG=trace`
/// prints every token and numeric state transition).
pub fn init() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| {
            let (prefix, color) = match record.level() {
                Level::Error => ("error", "\x1b[31m"),
                Level::Warn => ("warning", "\x1b[33m"),
                Level::Info => ("info", "\x1b[36m"),
                Level::Debug => ("debug", "\x1b[90m"),
                Level::Trace => ("trace", "\x1b[90m"),
            };
            let reset = "\x1b[0m";

            writeln!(buf, "{}{}{}: {}", color, prefix, reset, record.args())
        })
        .init();
}
