use thiserror::Error;

/// Errors from parsing the catalog's named options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown sort field: '{0}'")]
    UnknownSortField(String),

    #[error("unknown sort direction: '{0}' (expected 'asc' or 'desc')")]
    UnknownSortDirection(String),

    #[error("unknown bot command: '{0}'")]
    UnknownCommand(String),
}
