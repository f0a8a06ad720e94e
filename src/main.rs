use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = brand_cms::config::Config::load()?;
    cfg.check()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        environment = %cfg.environment,
        data_dir = %cfg.data_dir.display(),
        public_dir = %cfg.public_dir.display(),
        uploads_dir = %cfg.uploads_dir.display(),
        loglevel = %cfg.loglevel
    );

    let store = brand_cms::db::spawn(cfg.data_dir.clone()).await?;
    match brand_cms::service::users::bootstrap_admin(&store, &cfg).await {
        Ok(Some(user)) => info!(email = %user.email, "change the bootstrap admin password"),
        Ok(None) => {}
        Err(e) => warn!(error = %e, "failed to bootstrap admin user"),
    }

    let listen_addr = cfg.listen_addr.clone();
    let state = brand_cms::server::CmsState::new(store, Arc::new(cfg));
    let app = brand_cms::server::cms_router(state);

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("HTTP server listening on {listen_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
