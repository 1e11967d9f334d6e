//! Binding and serving.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use memkv_core_store::Store;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::router::router;

#[derive(thiserror::Error, Debug)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] io::Error),
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, store: Arc<dyn Store>) -> Result<(), ServeError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    serve_listener(listener, config, store, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_listener<F>(
    listener: TcpListener,
    config: ServerConfig,
    store: Arc<dyn Store>,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!(
        addr = %local_addr,
        max_upload_mib = config.max_upload_mib,
        "starting memkv server"
    );

    let app = router(store, &config);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        tracing::error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use memkv_core_store::MemoryStore;

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap().to_string();

        let config = ServerConfig::new(addr.clone(), 1);
        let err = serve(config, Arc::new(MemoryStore::new()))
            .await
            .unwrap_err();

        match err {
            ServeError::Bind { addr: reported, .. } => assert_eq!(reported, addr),
            other => panic!("unexpected error: {other}"),
        }
    }
}
