//! Typed tables built from plain structs, rendered as markdown or text.
//!
//! # Architecture
//!
//! - `value.rs` - Cell values and the Rust types that map to column types
//! - `table.rs` - `DataTable` with schema-checked rows
//! - `record.rs` - `Record` descriptors, `impl_record!` and the schema builder
//! - `markdown.rs` - Pipe-table rendering
//! - `text.rs` - Borderless text rendering

pub use self::error::{Error, Result};
pub use self::markdown::{MarkdownAlignment, to_markdown_table};
pub use self::record::{Field, Record, collect_data_table, schema_of, to_data_table};
pub use self::table::{DataColumn, DataRow, DataTable};
pub use self::text::{FormatConfig, to_text_table};
pub use self::value::{ColumnType, ColumnValue, Value};

mod error;
pub mod markdown;
pub mod record;
mod table;
pub mod text;
mod value;
