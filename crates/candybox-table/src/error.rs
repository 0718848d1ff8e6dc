use crate::value::ColumnType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a column named '{column}' already belongs to table '{table}'")]
    DuplicateColumn { table: String, column: String },

    #[error("row has {actual} values but the table has {expected} columns")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("column '{column}' holds {expected:?} values, got {actual:?}")]
    TypeMismatch {
        column:   String,
        expected: ColumnType,
        actual:   ColumnType,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
