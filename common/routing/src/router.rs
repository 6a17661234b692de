use std::fmt::Display;

use axum::{
    Router,
    handler::Handler,
    http::StatusCode,
    middleware,
    routing::{MethodRouter, get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::debug;
use utoipa::openapi::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::metrics;

pub const METRICS_PATH: &str = "/metrics";

const METRICS_DISABLED_MESSAGE: &str =
    "Metrics endpoint is disabled. Metrics must be enabled and the service restarted";

struct Route {
    method: &'static str,
    root_path: &'static str,
    relative_path: &'static str,
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}{}",
            self.method, self.root_path, self.relative_path
        )
    }
}

/// Registers handlers against (method, path) pairs under a single root path.
/// The built router also serves the OpenAPI document and a swagger UI under that root,
/// and a top level metrics endpoint.
pub struct RouterBuilder<S> {
    inner: OpenApiRouter<S>,
    root_path: &'static str,
    routes: Vec<Route>,
}

impl<S> RouterBuilder<S>
where
    S: Send + Sync + Clone + 'static,
{
    pub fn new(root_path: &'static str) -> Self {
        Self {
            inner: OpenApiRouter::new(),
            root_path,
            routes: Vec::new(),
        }
    }

    pub fn get<T, F>(mut self, path: &'static str, handler: F) -> Self
    where
        F: Handler<T, S>,
        T: 'static,
    {
        self.inner = self.inner.route(path, get(handler));
        self.routes.push(Route {
            method: "GET",
            root_path: self.root_path,
            relative_path: path,
        });
        self
    }

    pub fn post<T, F>(mut self, path: &'static str, handler: F) -> Self
    where
        F: Handler<T, S>,
        T: 'static,
    {
        self.inner = self.inner.route(path, post(handler));
        self.routes.push(Route {
            method: "POST",
            root_path: self.root_path,
            relative_path: path,
        });
        self
    }

    pub fn build_no_metrics(self, app_state: S, api_doc: OpenApi) -> Router {
        self.log_routes();
        let metrics_route = get(|| async { (StatusCode::SERVICE_UNAVAILABLE, METRICS_DISABLED_MESSAGE) });
        build(self.root_path, self.inner, app_state, api_doc, metrics_route)
    }

    pub fn build_with_metrics(
        self,
        app_state: S,
        api_doc: OpenApi,
        metrics_handle: PrometheusHandle,
    ) -> Router {
        self.log_routes();

        let main_router = self
            .inner
            .route_layer(middleware::from_fn(metrics::track_http));
        let metrics_route = get(|| async move { metrics_handle.render() });

        build(self.root_path, main_router, app_state, api_doc, metrics_route)
    }

    fn log_routes(&self) {
        for route in &self.routes {
            debug!("Building route - {route}")
        }
    }
}

fn build<S>(
    root_path: &'static str,
    main_router: OpenApiRouter<S>,
    app_state: S,
    api_doc: OpenApi,
    metrics_route: MethodRouter,
) -> Router
where
    S: Send + Sync + Clone + 'static,
{
    let main_routes = OpenApiRouter::new()
        .nest(root_path, main_router)
        .with_state(app_state);
    let (router, api) = OpenApiRouter::with_openapi(api_doc)
        .merge(main_routes)
        .split_for_parts();

    router.route(METRICS_PATH, metrics_route).merge(
        SwaggerUi::new(format!("{root_path}/swagger-ui"))
            .url(format!("{root_path}/api-docs/openapi.json"), api),
    )
}
