use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use crate::model::PipelineGroup;

fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builds the overview listing: one row per group, labeled with the
/// pipeline count and the page path that selects the group.
pub fn group_list_table(groups: &[PipelineGroup]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Group", "Path"]);

    for group in groups {
        table.add_row(vec![
            Cell::new(format!("{} ({})", group.name, group.pipelines.len())),
            Cell::new(format!("/{}", group.name)),
        ]);
    }

    table
}
