//! Record descriptors and the schema builder.
//!
//! A type opts in by listing its fields once, usually through
//! [`impl_record!`](crate::impl_record). Both the schema and the row values
//! are derived from that single list.

use crate::error::Result;
use crate::table::DataTable;
use crate::value::{ColumnType, ColumnValue, Value};

/// One column of a record: its name, type and how to read it.
pub struct Field<R> {
    pub name:        &'static str,
    pub column_type: ColumnType,
    pub read:        fn(&R) -> Value,
}

pub trait Record {
    /// Name given to tables built from this record.
    fn table_name() -> &'static str;

    fn fields() -> Vec<Field<Self>>
    where
        Self: Sized;
}

/// Column type of the field a getter points at.
#[doc(hidden)]
pub fn column_type_of<R, T: ColumnValue>(_getter: fn(&R) -> &T) -> ColumnType { T::COLUMN_TYPE }

/// Implements [`Record`] for a struct by listing its fields.
///
/// Columns are named after the fields unless renamed with `as`:
///
/// ```
/// use candybox_table::impl_record;
///
/// struct Person {
///     name: String,
///     age:  Option<u32>,
/// }
///
/// impl_record!(Person { name as "Name", age as "Age" });
/// ```
#[macro_export]
macro_rules! impl_record {
    (@name $field:ident) => { stringify!($field) };
    (@name $field:ident $column:literal) => { $column };
    ($ty:ident { $($field:ident $(as $column:literal)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn table_name() -> &'static str { stringify!($ty) }

            fn fields() -> Vec<$crate::Field<Self>> {
                vec![$(
                    $crate::Field {
                        name:        $crate::impl_record!(@name $field $($column)?),
                        column_type: $crate::record::column_type_of::<$ty, _>(|record| &record.$field),
                        read:        |record: &$ty| $crate::ColumnValue::to_value(&record.$field),
                    }
                ),*]
            }
        }
    };
}

fn schema_from<R: Record>(fields: &[Field<R>]) -> Result<DataTable> {
    let mut table = DataTable::new(R::table_name());
    for field in fields {
        table.add_column(field.name, field.column_type)?;
    }
    Ok(table)
}

/// An empty table named after `R` with one column per field.
pub fn schema_of<R: Record>() -> Result<DataTable> { schema_from(&R::fields()) }

/// The schema of a single record. No row is added.
pub fn to_data_table<R: Record>(_record: &R) -> Result<DataTable> { schema_of::<R>() }

/// The schema plus one row per record, in iteration order.
pub fn collect_data_table<'a, R, I>(records: I) -> Result<DataTable>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let fields = R::fields();
    let mut table = schema_from(&fields)?;

    for record in records {
        table.add_row(fields.iter().map(|field| (field.read)(record)).collect())?;
    }

    tracing::debug!(
        table = table.name(),
        columns = table.columns().len(),
        rows = table.rows().len(),
        "populated data table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Pair {
        left:  i32,
        right: i32,
    }

    impl_record!(Pair { left as "Side", right as "Side" });

    #[test]
    fn duplicate_field_names_fail_the_schema() {
        assert!(matches!(schema_of::<Pair>(), Err(Error::DuplicateColumn { .. })));
        assert!(matches!(
            collect_data_table(&[Pair { left: 1, right: 2 }]),
            Err(Error::DuplicateColumn { .. })
        ));
    }
}
