use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logging(default_level: &str) {
    let default_filter = format!(
        "blood_donor_directory={level},tower_http={level}",
        level = default_level.trim()
    );

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}
