//! Logging initialization for the `rur-gen` binary
//!
//! Logs go to stderr so that nothing interferes with generated output on stdout.
//! `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(level: &str, json: bool) -> anyhow::Result<()> {
    let env_filter = build_env_filter(level);
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json {
        let layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stderr);
        subscriber.with(layer).try_init()?;
    } else {
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_writer(std::io::stderr);
        subscriber.with(layer).try_init()?;
    }

    Ok(())
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "rur_gen={},rur_codegen={},rur_idl={}",
            level, level, level
        ))
    })
}
