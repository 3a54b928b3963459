//! Error types for catalog validation and build generation.
//!
//! Malformed shareable identifiers are not errors: decoding returns `None`.
//! The errors here are either defects in catalog data ([`CatalogError`]) or
//! rejected caller input ([`NotFoundError`]).

use crate::catalog::{GameId, Role};

/// Severity level of an error, used for categorization and handling strategy.
///
/// - **Validation**: invalid caller input, reject without retry
/// - **Fatal**: malformed catalog data, cannot be fixed at runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    Validation,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates broken content rather than bad input.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common classification interface for loadout errors.
pub trait LoadoutError: std::fmt::Display + std::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable string identifier of the variant, for logs and tests.
    fn error_code(&self) -> &'static str;
}

/// The catalog is missing data the engine requires, or declares invalid data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("game '{game}': no starter item tagged '{tag}' for role {role}")]
    MissingMandatoryStarter { game: GameId, role: Role, tag: String },

    #[error("game '{game}': no generic starter item available")]
    NoGenericStarter { game: GameId },

    #[error("catalog data is malformed: {0}")]
    Malformed(String),

    #[error("game '{0}' is defined more than once")]
    DuplicateGame(GameId),

    #[error("game '{game}': item id '{item}' is defined more than once")]
    DuplicateItem { game: GameId, item: String },

    #[error("game '{game}': champion id '{entity}' is defined more than once")]
    DuplicateEntity { game: GameId, entity: String },

    #[error("game '{game}': item '{item}' has invalid affinity {value} for '{key}'")]
    InvalidAffinity {
        game: GameId,
        item: String,
        key: String,
        value: f64,
    },

    #[error("game '{game}': starter rule for {role} references tag '{tag}' matching no starter")]
    UnmatchedStarterRule { game: GameId, role: Role, tag: String },
}

impl LoadoutError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingMandatoryStarter { .. } => "CATALOG_MISSING_MANDATORY_STARTER",
            Self::NoGenericStarter { .. } => "CATALOG_NO_GENERIC_STARTER",
            Self::Malformed(_) => "CATALOG_MALFORMED",
            Self::DuplicateGame(_) => "CATALOG_DUPLICATE_GAME",
            Self::DuplicateItem { .. } => "CATALOG_DUPLICATE_ITEM",
            Self::DuplicateEntity { .. } => "CATALOG_DUPLICATE_ENTITY",
            Self::InvalidAffinity { .. } => "CATALOG_INVALID_AFFINITY",
            Self::UnmatchedStarterRule { .. } => "CATALOG_UNMATCHED_STARTER_RULE",
        }
    }
}

/// The caller asked for something the registry does not know.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("unsupported game '{0}'")]
    UnknownGame(GameId),

    #[error("champion '{entity}' not found in game '{game}'")]
    UnknownEntity { game: GameId, entity: String },

    #[error("role '{role}' is not available in game '{game}'")]
    UnknownRole { game: GameId, role: String },
}

impl LoadoutError for NotFoundError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownGame(_) => "NOT_FOUND_GAME",
            Self::UnknownEntity { .. } => "NOT_FOUND_ENTITY",
            Self::UnknownRole { .. } => "NOT_FOUND_ROLE",
        }
    }
}

/// Errors surfaced by [`crate::generator::BuildGenerator`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

impl LoadoutError for GenerateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Catalog(e) => e.severity(),
            Self::NotFound(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::NotFound(e) => e.error_code(),
        }
    }
}
