//! Small, pure helpers for everyday application code.
//!
//! The crate re-exports its member crates under short module names:
//!
//! - [`text`] - string validation, sanitizing, typed parsing and codecs
//! - [`number`] - human-readable byte sizes and range checks
//! - [`time`] - date parsing, relative time and calendar helpers (`time` feature)
//! - [`table`] - record schemas and markdown tables (`table` feature)
//! - [`verify`] - argument guards (`verify` feature)
//!
//! Extension traits are gathered in [`prelude`].
//!
//! ```
//! use candybox::prelude::*;
//!
//! assert!("\t ".is_blank());
//! assert_eq!(1536u32.to_file_size_string().unwrap(), "2KB");
//! ```

pub use candybox_number as number;
#[cfg(feature = "table")]
pub use candybox_table as table;
pub use candybox_text as text;
#[cfg(feature = "time")]
pub use candybox_time as time;
#[cfg(feature = "verify")]
pub use candybox_verify as verify;

pub mod prelude {
    pub use candybox_number::ToFileSizeString;
    pub use candybox_text::{EnumExt, EnumMembers, StrExt};

    #[cfg(feature = "table")]
    pub use candybox_table::{ColumnValue, Record};
    #[cfg(feature = "time")]
    pub use candybox_time::{DateStrExt, DateTimeExt};
}
