//! Help text generation for ctui commands.

use std::collections::BTreeMap;

/// First line of the help block.
pub const HELP_HEADER: &str = "==================== Help ====================";

/// Last line of the help block.
pub const HELP_FOOTER: &str = "==============================================";

/// Intro shown when the configuration does not replace it.
pub const DEFAULT_HELP_INTRO: &str = "Welcome to Control Things User Interface, or ctui.

You can replace this help message by setting console.help_intro in the config file.";

/// Renders rows as a borderless table.
///
/// Every column but the last is left-aligned and padded to its widest cell,
/// columns are separated by two spaces, and trailing whitespace is dropped.
pub fn format_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                line.push_str(cell);
                if i + 1 < row.len() {
                    let pad = widths[i] - cell.chars().count();
                    line.extend(std::iter::repeat(' ').take(pad));
                }
            }
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generates the help block from command descriptions.
pub fn generate_help_text(
    intro: Option<&str>,
    commands: &BTreeMap<String, Option<String>>,
) -> String {
    let rows: Vec<Vec<String>> = commands
        .iter()
        .map(|(name, description)| vec![name.clone(), description.clone().unwrap_or_default()])
        .collect();

    let intro = intro.unwrap_or(DEFAULT_HELP_INTRO).trim_end();
    let mut text = format!("{HELP_HEADER}\n{intro}\n\n");
    let table = format_table(&rows);
    if !table.is_empty() {
        text.push_str(&table);
        text.push('\n');
    }
    text.push_str(HELP_FOOTER);
    text.push('\n');
    text
}
