pub mod schema;
pub mod validate;

use metacheck_core::errors::{McError, MetaCheckError};
use metacheck_core_types::Sensitive;
use metacheck_store::DatabaseTarget;

/// Resolve `--database-url` / `DATABASE_URL` into a snapshot location
pub fn resolve_target(url: Option<String>) -> Result<DatabaseTarget, McError> {
    let url = url
        .map(Sensitive::new)
        .ok_or_else(|| McError::from(MetaCheckError::MissingDatabaseUrl))?;
    DatabaseTarget::resolve(&url)
}
