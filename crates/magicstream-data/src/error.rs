//! Error types for the data access layer.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Result alias for data layer operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised by the data access layer.
#[derive(Debug)]
pub enum DataError {
    /// Migration execution failed.
    MigrationFailed {
        /// Underlying migration error.
        source: sqlx::migrate::MigrateError,
    },
    /// A database operation failed.
    QueryFailed {
        /// Operation identifier.
        operation: &'static str,
        /// Underlying SQL error.
        source: sqlx::Error,
    },
    /// An insert targeted an imdb id that already exists.
    DuplicateMovie {
        /// Conflicting imdb id.
        imdb_id: String,
    },
    /// An update targeted an imdb id with no catalog row.
    MovieNotFound {
        /// Missing imdb id.
        imdb_id: String,
    },
}

impl Display for DataError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MigrationFailed { .. } => formatter.write_str("migration failed"),
            Self::QueryFailed { .. } => formatter.write_str("database operation failed"),
            Self::DuplicateMovie { .. } => formatter.write_str("movie already exists"),
            Self::MovieNotFound { .. } => formatter.write_str("movie not found"),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MigrationFailed { source } => Some(source),
            Self::QueryFailed { source, .. } => Some(source),
            Self::DuplicateMovie { .. } | Self::MovieNotFound { .. } => None,
        }
    }
}

impl From<sqlx::Error> for DataError {
    fn from(source: sqlx::Error) -> Self {
        Self::QueryFailed {
            operation: "sqlx operation",
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_error_display_and_source() {
        let migration = DataError::MigrationFailed {
            source: sqlx::migrate::MigrateError::VersionMissing(1),
        };
        assert_eq!(migration.to_string(), "migration failed");
        assert!(migration.source().is_some());

        let query = DataError::QueryFailed {
            operation: "fetch",
            source: sqlx::Error::RowNotFound,
        };
        assert_eq!(query.to_string(), "database operation failed");
        assert!(query.source().is_some());

        let duplicate = DataError::DuplicateMovie {
            imdb_id: "tt0000001".to_string(),
        };
        assert_eq!(duplicate.to_string(), "movie already exists");
        assert!(duplicate.source().is_none());

        let missing = DataError::MovieNotFound {
            imdb_id: "tt0000001".to_string(),
        };
        assert_eq!(missing.to_string(), "movie not found");
        assert!(missing.source().is_none());
    }
}
