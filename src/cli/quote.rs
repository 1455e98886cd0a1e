use super::ui;
use crate::core::ConversionFlow;
use crate::core::convert::{FOREIGN_CURRENCY, LOCAL_CURRENCY};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};
use indicatif::ProgressBar;

pub async fn run(flow: &ConversionFlow, pb: &ProgressBar) -> Result<()> {
    ui::start_spinner(pb, "Fetching quote...");
    let quote = flow.quote().await;
    pb.finish_and_clear();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Pair"),
        ui::header_cell("Sell"),
        ui::header_cell("Source"),
    ]);
    table.add_row(vec![
        Cell::new(format!("{FOREIGN_CURRENCY}/{LOCAL_CURRENCY}")),
        Cell::new(format!("{:.2}", quote.sell_rate)).set_alignment(CellAlignment::Right),
        Cell::new(quote.source.to_string()),
    ]);
    println!("{table}");
    Ok(())
}
