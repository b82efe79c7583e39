use metacheck_core_types::RunId;
use thiserror::Error;

/// Result type alias using McError
pub type Result<T> = std::result::Result<T, McError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that is printed by the CLI and
/// attached to `end_error` log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McErrorKind {
    // Setup
    InvalidInput,
    MissingConfig,
    UnsupportedTarget,
    NotFound,

    // Snapshot access
    QueryFailed,
    UnexpectedValue,
    SchemaEmpty,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // A check panicked instead of returning
    CheckPanicked,

    // Internal
    Internal,
}

impl McErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            McErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            McErrorKind::MissingConfig => "ERR_MISSING_CONFIG",
            McErrorKind::UnsupportedTarget => "ERR_UNSUPPORTED_TARGET",
            McErrorKind::NotFound => "ERR_NOT_FOUND",
            McErrorKind::QueryFailed => "ERR_QUERY_FAILED",
            McErrorKind::UnexpectedValue => "ERR_UNEXPECTED_VALUE",
            McErrorKind::SchemaEmpty => "ERR_SCHEMA_EMPTY",
            McErrorKind::Io => "ERR_IO",
            McErrorKind::Serialization => "ERR_SERIALIZATION",
            McErrorKind::Persistence => "ERR_PERSISTENCE",
            McErrorKind::CheckPanicked => "ERR_CHECK_PANICKED",
            McErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind can only occur before any check has been evaluated
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            McErrorKind::InvalidInput
                | McErrorKind::MissingConfig
                | McErrorKind::UnsupportedTarget
                | McErrorKind::NotFound
        )
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct McError {
    kind: McErrorKind,
    op: Option<String>,
    check: Option<String>,
    run_id: Option<RunId>,
    message: String,
}

impl McError {
    /// Create a new error with the specified kind
    pub fn new(kind: McErrorKind) -> Self {
        Self {
            kind,
            op: None,
            check: None,
            run_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the check that was running
    pub fn with_check(mut self, check: impl Into<String>) -> Self {
        self.check = Some(check.into());
        self
    }

    /// Add run correlation context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> McErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn check(&self) -> Option<&str> {
        self.check.as_deref()
    }

    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for McError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(check) = &self.check {
            write!(f, " (check: {})", check)?;
        }
        Ok(())
    }
}

impl std::error::Error for McError {}

// ========== End Error Facility ==========

/// Domain failures raised while preparing or executing a validation run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetaCheckError {
    /// No connection target from the command line or environment
    #[error("DATABASE_URL is not set (and --database-url not provided).")]
    MissingDatabaseUrl,

    /// Connection target uses a scheme this build cannot open
    #[error("Unsupported connection target scheme '{scheme}' (expected a SQLite path or sqlite: URL)")]
    UnsupportedScheme { scheme: String },

    /// Snapshot database file does not exist
    #[error("Snapshot database not found: {path}")]
    SnapshotNotFound { path: String },

    /// Snapshot file exists but SQLite cannot read it as a database
    #[error("Snapshot database unreadable: {path}: {reason}")]
    UnreadableSnapshot { path: String, reason: String },

    /// `:memory:` only ever names a fresh, empty database
    #[error("In-memory target ':memory:' holds no snapshot; point DATABASE_URL at a database file")]
    InMemorySnapshot,

    /// Ratio ceiling outside [0, 1] or not a number
    #[error("Invalid unknown-ratio ceiling {value}: must be between 0 and 1")]
    InvalidRatioCeiling { value: f64 },

    /// Snapshot query failed
    #[error("Query failed: {reason}")]
    QueryFailed { reason: String },

    /// A scalar query returned a value that is not numeric
    #[error("Expected a numeric value but found {found}")]
    NonNumericScalar { found: String },

    /// Schema provisioning produced no tables
    #[error("No tables found after applying schema")]
    SchemaEmpty,
}

impl From<MetaCheckError> for McError {
    fn from(err: MetaCheckError) -> Self {
        let message = err.to_string();
        match err {
            MetaCheckError::MissingDatabaseUrl => McError::new(McErrorKind::MissingConfig)
                .with_op("resolve_target")
                .with_message(message),
            MetaCheckError::UnsupportedScheme { .. } => {
                McError::new(McErrorKind::UnsupportedTarget)
                    .with_op("resolve_target")
                    .with_message(message)
            }
            MetaCheckError::SnapshotNotFound { .. } => McError::new(McErrorKind::NotFound)
                .with_op("open_snapshot")
                .with_message(message),
            MetaCheckError::UnreadableSnapshot { .. } => McError::new(McErrorKind::Persistence)
                .with_op("open_snapshot")
                .with_message(message),
            MetaCheckError::InMemorySnapshot => McError::new(McErrorKind::UnsupportedTarget)
                .with_op("open_snapshot")
                .with_message(message),
            MetaCheckError::InvalidRatioCeiling { .. } => McError::new(McErrorKind::InvalidInput)
                .with_op("validate_params")
                .with_message(message),
            MetaCheckError::QueryFailed { .. } => {
                McError::new(McErrorKind::QueryFailed).with_message(message)
            }
            MetaCheckError::NonNumericScalar { .. } => {
                McError::new(McErrorKind::UnexpectedValue).with_message(message)
            }
            MetaCheckError::SchemaEmpty => McError::new(McErrorKind::SchemaEmpty)
                .with_op("apply_schema")
                .with_message(message),
        }
    }
}

impl From<&McError> for McError {
    fn from(err: &McError) -> Self {
        err.clone()
    }
}
