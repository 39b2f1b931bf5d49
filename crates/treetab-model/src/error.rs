use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreetabError {
    /// A user-submitted column index that is not a number. This is a
    /// validation failure reported back to the caller; the export is not
    /// attempted.
    #[error("invalid column index {value:?}: not a number")]
    InvalidColumnIndex { value: String },
    /// A numeric column index that does not exist in the built schema.
    #[error("column index {index} out of range for {len} columns")]
    ColumnIndexOutOfRange { index: usize, len: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, TreetabError>;
