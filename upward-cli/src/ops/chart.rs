//! Chart configuration commands; these never touch the network.

use super::output::{print_json, OutputFormat};
use super::ui::{print_header, print_table_header, print_table_row};
use upward_core::chart::{generate_dataset_colors, GradientSpec};
use upward_core::{ChartKind, ChartOptions};

pub fn show_config(kind: ChartKind) -> anyhow::Result<()> {
    // options are consumed by the renderer as JSON, regardless of output format
    print_json(&ChartOptions::for_kind(kind))
}

pub fn show_colors(count: usize, output: OutputFormat) -> anyhow::Result<()> {
    let colors = generate_dataset_colors(count);
    match output {
        OutputFormat::Json => {
            let rows: Vec<_> = colors
                .iter()
                .map(|c| {
                    serde_json::json!({ "color": c, "gradient": GradientSpec::for_color(c) })
                })
                .collect();
            print_json(&rows)?
        }
        OutputFormat::Table => {
            print_header("🎨 DATASET COLORS");
            print_table_header(&[
                ("#", 4),
                ("COLOR", 10),
                ("FILL TOP", 12),
                ("FILL BOTTOM", 12),
            ]);
            for (i, color) in colors.iter().enumerate() {
                let gradient = GradientSpec::for_color(color);
                let top = gradient.stops.first().map(|s| s.color.as_str()).unwrap_or("");
                let bottom = gradient.stops.last().map(|s| s.color.as_str()).unwrap_or("");
                print_table_row(&[
                    (i.to_string().as_str(), 4),
                    (*color, 10),
                    (top, 12),
                    (bottom, 12),
                ]);
            }
            println!();
        }
    }
    Ok(())
}
