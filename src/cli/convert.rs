use super::ui;
use crate::core::ConversionFlow;
use anyhow::Result;
use indicatif::ProgressBar;

pub async fn run(
    flow: &ConversionFlow,
    pb: &ProgressBar,
    amount: &str,
    direction: &str,
) -> Result<()> {
    ui::start_spinner(pb, "Fetching quote...");
    let result = flow.submit(amount, direction).await;
    pb.finish_and_clear();
    let conversion = result?;

    println!(
        "\n{}",
        ui::style_text(&conversion.text, ui::StyleType::Result)
    );
    println!(
        "{}",
        ui::style_text(
            &format!(
                "Quote: {:.2} ({})",
                conversion.quote.sell_rate, conversion.quote.source
            ),
            ui::StyleType::Subtle
        )
    );

    println!("\n{}", ui::style_text("History", ui::StyleType::Title));
    ui::print_history(&conversion.recent);
    Ok(())
}
