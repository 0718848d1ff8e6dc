//! Text validators, transformers and typed parsing.
//!
//! # Architecture
//!
//! - `blank.rs` - Blank detection and invisible-character trimming
//! - `validate.rs` - Shape checks (email, URL, GUID, culture, numbers, Base64)
//! - `transform.rs` - Truncation, casing, new-line and special-char removal
//! - `number.rs` - `NumberStyles` and styled numeric parsing
//! - `parse.rs` - Required and defaulted conversions to integers and decimals
//! - `guid.rs` - Exact GUID layouts
//! - `culture.rs` - Culture identifiers and date field order
//! - `enums.rs` - Enum name/number conversions
//! - `encode.rs` / `html.rs` - Base64, form-URL and HTML codecs
//! - `sanitize.rs` - Safe file names and paths

pub use self::blank::{is_blank, is_not_null_or_blank, is_null_or_blank, trim_all, trim_blank};
pub use self::culture::{Culture, DateOrder};
pub use self::encode::TextEncoding;
pub use self::enums::{EnumExt, EnumMembers};
pub use self::error::{Error, Result};
pub use self::ext::StrExt;
pub use self::guid::GuidFormat;
pub use self::number::{FromStyled, NumberStyles};

pub mod blank;
pub mod culture;
pub mod encode;
pub mod enums;
mod error;
mod ext;
pub mod guid;
pub mod html;
pub mod number;
pub mod parse;
pub mod sanitize;
pub mod transform;
pub mod validate;
