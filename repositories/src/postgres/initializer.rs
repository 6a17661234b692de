use crate::postgres::people::PersonRepo;
use crate::postgres::{ConnectionDetails, RepoMigrationErr};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use error_stack::{Report, ResultExt};
use std::str::FromStr;
use tokio_postgres::{Config, NoTls};
use tracing::debug;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("./src/postgres/migrations");
}

#[derive(Debug, thiserror::Error)]
#[error("failed to create repos")]
pub struct RepoCreationErr;

/// Builds a pooled postgres person repository, running the embedded migrations first.
#[derive(Debug, Default)]
pub struct RepoCreator {
    pool_size: Option<usize>,
}

impl RepoCreator {
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = Some(pool_size);
        self
    }

    pub async fn create(
        self,
        connection_details: ConnectionDetails,
    ) -> Result<PersonRepo, Report<RepoCreationErr>> {
        let config = match connection_details {
            ConnectionDetails::Url(url) => {
                Config::from_str(&url).change_context(RepoCreationErr)?
            }
        };

        let mgr_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };
        let mgr = Manager::from_config(config, NoTls, mgr_config);
        let mut pool_builder = Pool::builder(mgr);
        if let Some(pool_size) = self.pool_size {
            pool_builder = pool_builder.max_size(pool_size);
        }
        debug!("building connection pool..");
        let pool = pool_builder.build().change_context(RepoCreationErr)?;
        debug!("connection pool built, running migrations");

        run_migrations(&pool)
            .await
            .change_context(RepoCreationErr)?;

        PersonRepo::new(pool)
            .await
            .change_context(RepoCreationErr)
    }
}

// the migration connection is released before the repo is built, so a pool of size 1 still works
async fn run_migrations(pool: &Pool) -> Result<(), Report<RepoMigrationErr>> {
    let mut handle = pool.get().await.change_context(RepoMigrationErr)?;

    let client = &mut **handle;

    embedded::migrations::runner()
        .run_async(client)
        .await
        .change_context(RepoMigrationErr)
        .attach("people repo")?;
    Ok(())
}
