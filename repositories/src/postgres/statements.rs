use deadpool_postgres::Object;
use error_stack::{Report, ResultExt};
use tokio_postgres::Statement;
use tokio_postgres::types::Type;

#[derive(Debug, thiserror::Error)]
#[error("failed to prepare people statement")]
pub struct StatementPrepareError;

const FIND_BY_ID: &str = "select id, name, details from people where id = $1";
const SAVE: &str =
    "insert into people (name, details) values ($1, $2) returning id, name, details";

/// Statements are prepared per connection, so these go through the pool's
/// statement cache of whichever connection is handed out.
pub async fn find_by_id(client: &Object) -> Result<Statement, Report<StatementPrepareError>> {
    client
        .prepare_typed_cached(FIND_BY_ID, &[Type::INT8])
        .await
        .change_context(StatementPrepareError)
}

pub async fn save(client: &Object) -> Result<Statement, Report<StatementPrepareError>> {
    client
        .prepare_typed_cached(SAVE, &[Type::VARCHAR, Type::JSONB])
        .await
        .change_context(StatementPrepareError)
}

/// Prepares every statement once on `client` so bad SQL fails at startup instead of on the first request.
pub async fn prepare_all(client: &Object) -> Result<(), Report<StatementPrepareError>> {
    find_by_id(client).await?;
    save(client).await?;
    Ok(())
}
