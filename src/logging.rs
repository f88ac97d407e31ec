use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stderr logger. `verbosity` is the number of `-v` flags.
pub fn initialize_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    fmt()
        .with_env_filter(EnvFilter::new(format!("pclip={level}")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
