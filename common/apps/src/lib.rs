use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use axum::Router;
use axum::response::Response;
use error_stack::{Report, ResultExt};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppProperties {
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
#[error("the app exited with an error")]
pub struct AppError;

pub type AppResult<T> = Result<T, Report<AppError>>;

/// Binds to `properties.port` on all IPv4 interfaces and serves `routes` until
/// the process receives Ctrl-C or SIGTERM.
pub async fn run(routes: Router, properties: AppProperties) -> AppResult<()> {
    let listener = build_listener(properties.port).await?;
    serve_on(listener, routes, shutdown_signal()).await
}

/// Serves `routes` on an already bound listener, stopping once `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, routes: Router, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let routes = with_tracing(routes);

    info!(
        "starting up people service on port {}",
        listener.local_addr().change_context(AppError)?.port()
    );

    axum::serve(listener, routes)
        .with_graceful_shutdown(shutdown)
        .await
        .change_context(AppError)
}

fn with_tracing(routes: Router) -> Router {
    routes.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http().on_response(
        |res: &Response, latency: Duration, _span: &Span| {
            info!("returned {} in {}ms", res.status(), latency.as_millis());
        },
    )))
}

async fn build_listener(port: u16) -> AppResult<TcpListener> {
    TcpListener::bind(SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port)))
        .await
        .change_context(AppError)
        .attach_with(|| format!("failed to bind to port {port}"))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {e}");
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

    info!("shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn serve_on_stops_when_shutdown_resolves() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let router = Router::new().route("/", get(|| async { "up" }));
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve_on(listener, router, async move {
            let _ = rx.await;
        }));

        tx.send(()).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server stops after shutdown")
            .expect("server task does not panic");
        assert!(result.is_ok());
    }
}
