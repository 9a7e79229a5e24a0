use color_eyre::eyre::Result;
use signoff::{LogoutService, Settings, SettingsStore};
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Standalone logout service
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;

    // Provider settings can be swapped at runtime
    let store = SettingsStore::new(settings.security.clone());
    #[cfg(unix)]
    reload_on_hangup(store.clone());

    let allowed_origins = settings.auth.allowed_origins.clone();
    let logout_service = LogoutService::from_settings(&settings, store);

    let listener = TcpListener::bind(&settings.server.address).await?;
    tracing::info!("Starting logout service...");

    logout_service
        .run_standalone(listener, Some(allowed_origins))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

/// Re-read provider settings whenever the process receives SIGHUP.
#[cfg(unix)]
fn reload_on_hangup(store: SettingsStore) {
    use tokio::signal::unix::{SignalKind, signal};

    tokio::spawn(async move {
        let mut hangups = match signal(SignalKind::hangup()) {
            Ok(hangups) => hangups,
            Err(e) => {
                tracing::warn!(error = %e, "Settings reload on SIGHUP unavailable");
                return;
            }
        };

        while hangups.recv().await.is_some() {
            match Settings::load() {
                Ok(settings) => store.replace(settings.security),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to reload settings, keeping current ones")
                }
            }
        }
    });
}
