use crate::table::DataTable;

/// Content alignment encoded in the header/body separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkdownAlignment {
    #[default]
    Default,
    Center,
    Left,
    Right,
}

impl MarkdownAlignment {
    pub fn separator(self) -> &'static str {
        match self {
            Self::Default => "---",
            Self::Center => ":---:",
            Self::Left => ":---",
            Self::Right => "---:",
        }
    }
}

/// Renders the table as a pipe table; "" when it has no rows or no columns.
pub fn to_markdown_table(table: &DataTable, alignment: MarkdownAlignment) -> String {
    if table.is_empty() {
        return String::new();
    }

    let mut markdown = String::new();
    for column in table.columns() {
        markdown.push('|');
        markdown.push_str(&column.name);
    }
    markdown.push_str("|\n");

    markdown.push('|');
    for _ in table.columns() {
        markdown.push_str(alignment.separator());
        markdown.push('|');
    }
    markdown.push('\n');

    for row in table.rows() {
        for value in row.values() {
            markdown.push('|');
            markdown.push_str(&value.to_string());
        }
        markdown.push_str("|\n");
    }

    markdown
}
