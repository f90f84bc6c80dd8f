use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid sort field: {0} (expected 'name' or 'score')")]
    InvalidSortField(String),

    #[error("Invalid sort direction: {0} (expected 'asc' or 'desc')")]
    InvalidSortDirection(String),

    #[error("Invalid page size: {0} (must be greater than zero)")]
    InvalidPageSize(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
