use clap::{Args, ValueEnum};
use serde::Serialize;

use ocgen::plan::{self, PlanEntry};
use ocgen::{package, session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// Plan entries inside the JSON envelope
    Json,
    /// Indented tree, printed raw
    Text,
}

#[derive(Args)]
pub struct TreeArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: TreeFormat,
}

pub fn is_text(args: &TreeArgs) -> bool {
    args.format == TreeFormat::Text
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeOutput {
    command: String,
    archive: String,
    count: usize,
    entries: Vec<PlanEntry>,
}

pub fn run(
    _args: TreeArgs,
    _global: &crate::commands::GlobalArgs,
) -> ocgen::Result<(TreeOutput, i32)> {
    let session = session::load()?;
    let config = session.resolved_config();
    let entries = plan::plan(&config);

    Ok((
        TreeOutput {
            command: "tree".to_string(),
            archive: package::archive_name(&config),
            count: entries.len(),
            entries,
        },
        0,
    ))
}

pub fn run_markdown(_args: TreeArgs) -> ocgen::Result<(String, i32)> {
    let session = session::load()?;
    let config = session.resolved_config();
    let entries = plan::plan(&config);

    Ok((plan::render_tree(&config, &entries), 0))
}
