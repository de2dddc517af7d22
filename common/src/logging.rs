use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

static RELOAD_HANDLE: OnceCell<reload::Handle<EnvFilter, Registry>> = OnceCell::new();

/// Initializes the global tracing subscriber with the given env-filter
/// level. Calling it again only swaps the filter, so tests and
/// long-running binaries can both use it freely.
pub fn init(level: &str) -> Result<()> {
    let reload = RELOAD_HANDLE.get_or_try_init(|| -> Result<_> {
        let (filter, handle) = reload::Layer::new(EnvFilter::try_new(level)?);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()?;

        Ok(handle)
    })?;

    reload.reload(EnvFilter::try_new(level)?)?;

    Ok(())
}
