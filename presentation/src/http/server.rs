//! HTTP server lifecycle

use super::routes::routes;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use verdict_application::{ProviderGateway, RouterUseCase};

/// Serve the API on `addr` until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<G: ProviderGateway + 'static>(
    router: Arc<RouterUseCase<G>>,
    addr: SocketAddr,
    shutdown: CancellationToken,
) -> Result<(), warp::Error> {
    let (bound, server) = warp::serve(routes(router))
        .try_bind_with_graceful_shutdown(addr, async move { shutdown.cancelled().await })?;

    info!("Listening on http://{}", bound);
    server.await;
    info!("HTTP server stopped");

    Ok(())
}
