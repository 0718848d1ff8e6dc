use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::{ColumnType, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataColumn {
    pub name:        String,
    pub column_type: ColumnType,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataRow {
    values: Vec<Value>,
}

impl DataRow {
    pub fn get(&self, index: usize) -> Option<&Value> { self.values.get(index) }

    pub fn values(&self) -> &[Value] { &self.values }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl Index<usize> for DataRow {
    type Output = Value;

    fn index(&self, index: usize) -> &Value { &self.values[index] }
}

/// A named, typed grid of values.
///
/// Columns are ordered and uniquely named. Every row holds exactly one value
/// per column, either [`Value::Null`] or a value of the column's type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataTable {
    name:    String,
    columns: Vec<DataColumn>,
    rows:    Vec<DataRow>,
}

impl DataTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:    name.into(),
            columns: Vec::new(),
            rows:    Vec::new(),
        }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn columns(&self) -> &[DataColumn] { &self.columns }

    pub fn rows(&self) -> &[DataRow] { &self.rows }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    pub fn add_column(&mut self, name: impl Into<String>, column_type: ColumnType) -> Result<()> {
        let name = name.into();
        if self.column_index(&name).is_some() {
            return Err(Error::DuplicateColumn { table: self.name.clone(), column: name });
        }
        self.columns.push(DataColumn { name, column_type });
        Ok(())
    }

    pub fn add_row(&mut self, values: Vec<Value>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(Error::ArityMismatch {
                expected: self.columns.len(),
                actual:   values.len(),
            });
        }

        for (column, value) in self.columns.iter().zip(&values) {
            match value.column_type() {
                Some(actual) if actual != column.column_type => {
                    return Err(Error::TypeMismatch {
                        column: column.name.clone(),
                        expected: column.column_type,
                        actual,
                    });
                }
                _ => {}
            }
        }

        self.rows.push(DataRow { values });
        Ok(())
    }

    pub fn row(&self, index: usize) -> Option<&DataRow> { self.rows.get(index) }

    /// The value in row `row` under the column named `column`.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// `true` when the table has no rows or no columns.
    pub fn is_empty(&self) -> bool { self.rows.is_empty() || self.columns.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> DataTable {
        let mut table = DataTable::new("People");
        table.add_column("Name", ColumnType::Text).unwrap();
        table.add_column("Age", ColumnType::Integer).unwrap();
        table
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        let mut table = people();
        let err = table.add_column("Name", ColumnType::Text).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn { ref column, .. } if column == "Name"));
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn rows_must_match_the_schema() {
        let mut table = people();
        assert!(matches!(
            table.add_row(vec![Value::Text("Ann".into())]),
            Err(Error::ArityMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            table.add_row(vec![Value::Text("Ann".into()), Value::Text("x".into())]),
            Err(Error::TypeMismatch { expected: ColumnType::Integer, actual: ColumnType::Text, .. })
        ));
        assert!(table.rows().is_empty());
    }

    #[test]
    fn null_fits_every_column() {
        let mut table = people();
        table.add_row(vec![Value::Null, Value::Null]).unwrap();
        assert!(table.value(0, "Age").unwrap().is_null());
    }

    #[test]
    fn rows_by_index_and_name() {
        let mut table = people();
        table.add_row(vec![Value::Text("Ann".into()), Value::Integer(31)]).unwrap();
        assert_eq!(table.row(0).unwrap()[1], Value::Integer(31));
        assert_eq!(table.value(0, "Name"), Some(&Value::Text("Ann".into())));
        assert_eq!(table.value(0, "Missing"), None);
        assert_eq!(table.value(1, "Name"), None);
    }

    #[test]
    fn emptiness() {
        assert!(DataTable::new("t").is_empty());
        assert!(people().is_empty());
    }
}
