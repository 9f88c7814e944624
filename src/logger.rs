//! Tracing subscriber setup.  The terminal belongs to the game screen, so
//! log lines go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt::time, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::Result;

/// Install a file-backed subscriber.  `RUST_LOG` adds or overrides filter
/// directives.  Call once, early.
pub fn init(path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;

    let default_level = if cfg!(debug_assertions) {
        "frog_jump=debug"
    } else {
        "frog_jump=info"
    };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(
            std::env::var(EnvFilter::DEFAULT_ENV)
                .map(|env| format!("{default_level},{env}"))
                .unwrap_or_else(|_| default_level.to_string()),
        );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_timer(time::uptime())
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}
