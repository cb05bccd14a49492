use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use dailyfolder::consts::PREVIEW_ELLIPSIS;

/// First `limit` names, one per line, with an ellipsis line when cut short
pub(super) fn format_preview(entries: &[String], limit: usize) -> String {
    let mut lines: Vec<&str> = entries.iter().take(limit).map(String::as_str).collect();
    if entries.len() > limit {
        lines.push(PREVIEW_ELLIPSIS);
    }
    lines.join("\n")
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Create a table with the standard preset, inner borders, and a single-line header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
    table
}

#[cfg(test)]
mod tests {
    use super::format_preview;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("file{i:02}.txt")).collect()
    }

    #[test]
    fn preview_of_nothing_is_empty() {
        assert_eq!(format_preview(&[], 15), "");
    }

    #[test]
    fn preview_within_limit_has_no_ellipsis() {
        assert_eq!(format_preview(&names(2), 2), "file00.txt\nfile01.txt");
    }

    #[test]
    fn preview_over_limit_is_cut() {
        assert_eq!(format_preview(&names(3), 2), "file00.txt\nfile01.txt\n...");
    }

    #[test]
    fn preview_with_zero_limit_only_hints() {
        assert_eq!(format_preview(&names(1), 0), "...");
    }
}
