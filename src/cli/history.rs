use super::ui;
use crate::core::ConversionFlow;
use anyhow::Result;

pub async fn run(flow: &ConversionFlow) -> Result<()> {
    let recent = flow.recent().await?;
    println!("{}", ui::style_text("History", ui::StyleType::Title));
    ui::print_history(&recent);
    Ok(())
}
