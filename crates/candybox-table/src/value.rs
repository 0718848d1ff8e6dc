//! Cell values and the Rust types that map onto them.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Boolean,
    Integer,
    UnsignedInteger,
    Float,
    Decimal,
    Text,
    Char,
    DateTime,
    Date,
    Guid,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    UnsignedInteger(u64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    Char(char),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Guid(Uuid),
}

impl Value {
    pub fn is_null(&self) -> bool { matches!(self, Self::Null) }

    /// The column type this value belongs in; `None` for [`Value::Null`].
    pub fn column_type(&self) -> Option<ColumnType> {
        Some(match self {
            Self::Null => return None,
            Self::Boolean(_) => ColumnType::Boolean,
            Self::Integer(_) => ColumnType::Integer,
            Self::UnsignedInteger(_) => ColumnType::UnsignedInteger,
            Self::Float(_) => ColumnType::Float,
            Self::Decimal(_) => ColumnType::Decimal,
            Self::Text(_) => ColumnType::Text,
            Self::Char(_) => ColumnType::Char,
            Self::DateTime(_) => ColumnType::DateTime,
            Self::Date(_) => ColumnType::Date,
            Self::Guid(_) => ColumnType::Guid,
        })
    }
}

/// Display form used by the renderers; `Null` is empty.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::UnsignedInteger(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Char(value) => write!(f, "{value}"),
            Self::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
            Self::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Self::Guid(value) => write!(f, "{value}"),
        }
    }
}

/// A Rust type that can be stored in a table column.
pub trait ColumnValue {
    const COLUMN_TYPE: ColumnType;

    fn to_value(&self) -> Value;
}

macro_rules! impl_column_value {
    ($column_type:ident, $variant:ident => $($ty:ty),* $(,)?) => {$(
        impl ColumnValue for $ty {
            const COLUMN_TYPE: ColumnType = ColumnType::$column_type;

            fn to_value(&self) -> Value { Value::$variant((*self).into()) }
        }
    )*};
}

impl_column_value!(Boolean, Boolean => bool);
impl_column_value!(Integer, Integer => i8, i16, i32, i64);
impl_column_value!(UnsignedInteger, UnsignedInteger => u8, u16, u32, u64);
impl_column_value!(Float, Float => f32, f64);
impl_column_value!(Decimal, Decimal => Decimal);
impl_column_value!(Char, Char => char);
impl_column_value!(DateTime, DateTime => NaiveDateTime);
impl_column_value!(Date, Date => NaiveDate);
impl_column_value!(Guid, Guid => Uuid);

impl ColumnValue for String {
    const COLUMN_TYPE: ColumnType = ColumnType::Text;

    fn to_value(&self) -> Value { Value::Text(self.clone()) }
}

impl ColumnValue for &str {
    const COLUMN_TYPE: ColumnType = ColumnType::Text;

    fn to_value(&self) -> Value { Value::Text((*self).to_string()) }
}

/// Nullable fields share the column type of their inner value.
impl<T: ColumnValue> ColumnValue for Option<T> {
    const COLUMN_TYPE: ColumnType = T::COLUMN_TYPE;

    fn to_value(&self) -> Value { self.as_ref().map_or(Value::Null, ColumnValue::to_value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_unwraps_to_inner_type() {
        assert_eq!(<Option<i32> as ColumnValue>::COLUMN_TYPE, ColumnType::Integer);
        assert_eq!(<Option<NaiveDateTime> as ColumnValue>::COLUMN_TYPE, ColumnType::DateTime);
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert_eq!(Some(7u8).to_value(), Value::UnsignedInteger(7));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(2.5f32.to_value().to_string(), "2.5");
        assert_eq!(
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().to_value().to_string(),
            "2024-01-02"
        );
    }

    #[test]
    fn null_has_no_column_type() {
        assert_eq!(Value::Null.column_type(), None);
        assert_eq!(Value::Text("a".into()).column_type(), Some(ColumnType::Text));
    }
}
