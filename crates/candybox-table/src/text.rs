//! Plain-text rendering through `tabled`.

use tabled::{
    Table,
    builder::Builder,
    settings::{Panel, Style},
};

use crate::table::DataTable;

#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    pub header:       Option<String>,
    pub footer:       Option<String>,
    /// Leaves out the column-name row.
    pub hide_columns: bool,
}

impl FormatConfig {
    pub fn new() -> Self { Self::default() }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn hide_columns(mut self, hide: bool) -> Self {
        self.hide_columns = hide;
        self
    }

    pub fn build(self, table: &DataTable) -> Table {
        let mut builder = Builder::default();
        if !self.hide_columns {
            builder.push_record(table.columns().iter().map(|column| column.name.clone()));
        }
        for row in table.rows() {
            builder.push_record(row.values().iter().map(ToString::to_string));
        }

        let mut rendered = builder.build();
        if let Some(header) = self.header {
            rendered.with(Panel::header(header));
        }
        if let Some(footer) = self.footer {
            rendered.with(Panel::footer(footer));
        }
        rendered.with(Style::blank());
        rendered
    }
}

/// Renders the table as aligned, borderless text.
pub fn to_text_table(table: &DataTable, config: FormatConfig) -> String {
    config.build(table).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ColumnType, Value};

    fn sample() -> DataTable {
        let mut table = DataTable::new("tools");
        table.add_column("name", ColumnType::Text).unwrap();
        table.add_column("count", ColumnType::UnsignedInteger).unwrap();
        table.add_row(vec![Value::Text("hammer".into()), Value::UnsignedInteger(3)]).unwrap();
        table
    }

    #[test]
    fn column_names_shown_by_default() {
        let text = to_text_table(&sample(), FormatConfig::new());
        assert!(text.contains("name"));
        assert!(text.contains("hammer"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn column_names_can_be_hidden() {
        let text = to_text_table(&sample(), FormatConfig::new().hide_columns(true));
        assert!(!text.contains("name"));
        assert!(text.contains("hammer"));
    }

    #[test]
    fn panels() {
        let text = to_text_table(&sample(), FormatConfig::new().header("Tools").footer("1 item"));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.first().unwrap().contains("Tools"));
        assert!(lines.last().unwrap().contains("1 item"));
    }
}
