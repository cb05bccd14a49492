use comfy_table::Color;

use crate::output::format::{
    create_styled_table, format_preview, header_cell, right_cell, styled_cell,
};
use crate::output::view::FolderView;

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) preview_limit: usize,
}

fn status_label(view: &FolderView) -> (&'static str, Option<Color>) {
    if view.is_today {
        ("today", Some(Color::Green))
    } else if view.is_empty {
        ("empty", Some(Color::DarkGrey))
    } else {
        ("", None)
    }
}

/// Print folders in the order given
pub(crate) fn print_folder_table(views: &[FolderView], opts: TableOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Folder", c),
        header_cell("Entries", c),
        header_cell("Status", c),
        header_cell("Contents", c),
    ]);

    for view in views {
        let (status, status_color) = status_label(view);
        let name_color = if c && view.is_today { Some(Color::Green) } else { None };
        table.add_row(vec![
            styled_cell(&view.name, name_color, view.is_today),
            right_cell(&view.entries.len().to_string()),
            styled_cell(status, if c { status_color } else { None }, false),
            styled_cell(&format_preview(&view.entries, opts.preview_limit), None, false),
        ]);
    }

    println!("{table}");
}
