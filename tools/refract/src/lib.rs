//! Refract CLI library: command implementations and logging setup.

pub mod commands;

use std::sync::Once;

static LOGGING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber when `RUST_LOG` is set.
///
/// Spans from the resolver and synthesizer nest, so the tree layer shows
/// which type a debug event was emitted for.
pub fn init_logging() {
    LOGGING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
