use apps::{AppError, AppProperties, AppResult};
use axum::Router;
use config::{AppConfig, DatabaseConfig};
use dotenv::dotenv;
use error_stack::ResultExt;
use error_stack::fmt::ColorMode;
use metrics_exporter_prometheus::PrometheusHandle;
use people_core::PersonRepository;
use people_routes::state::PersonAppState;
use repositories::postgres::ConnectionDetails;
use repositories::postgres::initializer::RepoCreator;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod config;

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(_) => {
            info!("people service shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("people service exited with error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    error_stack::Report::set_color_mode(ColorMode::None);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("PEOPLE_LOG"))
        .init();
}

async fn try_main() -> AppResult<()> {
    // loaded before logging so PEOPLE_LOG can come from the .env file
    let dotenv_result = dotenv();
    init_logging();

    if let Err(e) = dotenv_result {
        debug!("no .env file loaded: {e}");
    }

    let config = AppConfig::from_env().change_context(AppError)?;
    debug!("loaded configuration {config:?}");

    let routes = build_routes(&config).await?;

    apps::run(routes, AppProperties { port: config.port }).await
}

async fn build_routes(config: &AppConfig) -> AppResult<Router> {
    let metrics_handle = if config.metrics_enabled {
        Some(routing::metrics::setup_recorder().change_context(AppError)?)
    } else {
        None
    };

    debug!("building routes..");
    let routes = match &config.database {
        Some(database) => person_routes(build_postgres_repo(database).await?, metrics_handle),
        None => {
            warn!("DATABASE_URL is not set, people are kept in memory and lost on shutdown");
            person_routes(repositories::memory::PersonRepo::new(), metrics_handle)
        }
    };
    debug!("routes built");

    Ok(routes)
}

fn person_routes<T>(repo: T, metrics_handle: Option<PrometheusHandle>) -> Router
where
    T: PersonRepository + Clone + Send + Sync + 'static,
{
    people_routes::routes::build(
        PersonAppState::new(PersonEngine::new(repo)),
        metrics_handle,
    )
}

#[instrument]
async fn build_postgres_repo(
    database: &DatabaseConfig,
) -> AppResult<repositories::postgres::people::PersonRepo> {
    let mut creator = RepoCreator::default();
    if let Some(pool_size) = database.pool_size {
        creator = creator.with_pool_size(pool_size);
    }

    debug!("initializing postgres repository");
    creator
        .create(ConnectionDetails::Url(database.url.clone()))
        .await
        .change_context(AppError)
}

#[derive(Debug, Clone)]
struct PersonEngine<T> {
    repo: T,
}

impl<T> PersonEngine<T> {
    fn new(repo: T) -> Self {
        Self { repo }
    }
}

impl<T> people_core::PersonEngine for PersonEngine<T>
where
    T: PersonRepository + Clone + Send + Sync + 'static,
{
    type Repo = T;

    fn repo(&self) -> Self::Repo {
        self.repo.clone()
    }
}
