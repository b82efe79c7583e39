//! Connection target parsing
//!
//! Accepts the forms a `DATABASE_URL` takes for a SQLite snapshot:
//! `sqlite:///abs/path.db`, `sqlite://rel.db`, `sqlite:rel.db`,
//! `file:rel.db`, a bare path, or `:memory:`.

use std::path::{Path, PathBuf};

use metacheck_core::errors::{McError, MetaCheckError};
use metacheck_core_types::Sensitive;

use crate::errors::Result;

const MEMORY: &str = ":memory:";

/// Resolved location of a snapshot database
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    File(PathBuf),
    InMemory,
}

impl DatabaseTarget {
    /// Parse a connection string
    ///
    /// # Errors
    ///
    /// - `MissingConfig` for an empty string
    /// - `UnsupportedTarget` for a non-SQLite URL scheme
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(McError::from(MetaCheckError::MissingDatabaseUrl));
        }

        let rest = if let Some(r) = raw.strip_prefix("sqlite://") {
            r
        } else if let Some(r) = raw.strip_prefix("sqlite:") {
            r
        } else if let Some(r) = raw.strip_prefix("file:") {
            r
        } else if let Some((scheme, _)) = raw.split_once("://") {
            return Err(McError::from(MetaCheckError::UnsupportedScheme {
                scheme: scheme.to_string(),
            }));
        } else {
            raw
        };

        // Drop URL options such as ?mode=ro; the store chooses its own flags
        let rest = rest.split('?').next().unwrap_or(rest);

        if rest == MEMORY {
            return Ok(DatabaseTarget::InMemory);
        }
        if rest.is_empty() {
            return Err(McError::from(MetaCheckError::MissingDatabaseUrl));
        }
        Ok(DatabaseTarget::File(PathBuf::from(rest)))
    }

    /// Parse a connection string that may embed credentials
    ///
    /// The raw string is only read for parsing; the log event carries the
    /// redacted form.
    ///
    /// # Errors
    ///
    /// Same as [`DatabaseTarget::parse`].
    pub fn resolve(url: &Sensitive<String>) -> Result<Self> {
        let target = Self::parse(url.expose())?;
        tracing::debug!(
            database_url = %url,
            target = target.kind(),
            "resolved snapshot target"
        );
        Ok(target)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DatabaseTarget::File(_) => "file",
            DatabaseTarget::InMemory => "memory",
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            DatabaseTarget::File(p) => Some(p.as_path()),
            DatabaseTarget::InMemory => None,
        }
    }
}
