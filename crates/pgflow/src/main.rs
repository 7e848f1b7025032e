mod catalog;

use anyhow::Result;
use pgflow_compose::{NullStyle, ToCompose, to_yaml};
use pgflow_core::assemble;

fn main() -> Result<()> {
    // マニフェストは stdout に流すので、ログは stderr に分ける
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let plan = catalog::upgrade_plan();
    tracing::debug!(steps = plan.steps.len(), "compose を生成");

    let compose = assemble(&plan)?;
    print!("{}", to_yaml(&compose.to_compose(), NullStyle::Blank));
    Ok(())
}
