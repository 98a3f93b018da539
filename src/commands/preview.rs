use clap::{Args, ValueEnum};
use serde::Serialize;

use ocgen::session;
use ocgen::templates::{admin, ocmod};

/// Artifact kinds the preview surface exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewArtifact {
    /// Admin settings controller
    Controller,
    /// Admin settings form (Twig)
    View,
    /// OCMOD install.xml
    Manifest,
}

impl PreviewArtifact {
    fn as_str(&self) -> &'static str {
        match self {
            PreviewArtifact::Controller => "controller",
            PreviewArtifact::View => "view",
            PreviewArtifact::Manifest => "manifest",
        }
    }
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Artifact to render
    #[arg(value_enum)]
    artifact: PreviewArtifact,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOutput {
    command: String,
    artifact: String,
    content: String,
}

fn render(args: &PreviewArgs) -> ocgen::Result<String> {
    let session = session::load()?;
    let config = session.resolved_config();

    Ok(match args.artifact {
        PreviewArtifact::Controller => admin::controller(&config, &session.fields),
        PreviewArtifact::View => admin::view(&config, &session.fields),
        PreviewArtifact::Manifest => ocmod::manifest(&config),
    })
}

pub fn run(
    args: PreviewArgs,
    _global: &crate::commands::GlobalArgs,
) -> ocgen::Result<(PreviewOutput, i32)> {
    let content = render(&args)?;

    Ok((
        PreviewOutput {
            command: "preview".to_string(),
            artifact: args.artifact.as_str().to_string(),
            content,
        },
        0,
    ))
}

pub fn run_markdown(args: PreviewArgs) -> ocgen::Result<(String, i32)> {
    let content = render(&args)?;
    Ok((content, 0))
}
