use clap::{Args, Subcommand};
use serde::Serialize;

use ocgen::extension::ExtensionConfig;
use ocgen::log_status;
use ocgen::session::{self, CodenameMode, ConfigPatch, Session};

use super::DynamicSetArgs;

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<ExtensionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    codename_mode: Option<CodenameMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<Vec<String>>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display the stored session and its resolved snapshot
    Show,
    /// Merge values into the extension configuration
    #[command(visible_aliases = ["edit", "merge"])]
    Set {
        #[command(flatten)]
        args: DynamicSetArgs,
    },
    /// Recreate the default session (clears fields and the codename latch)
    Reset,
}

pub fn run(
    args: ConfigArgs,
    _global: &crate::commands::GlobalArgs,
) -> ocgen::Result<(ConfigOutput, i32)> {
    match args.command {
        ConfigCommand::Show => show(),
        ConfigCommand::Set { args } => set(args),
        ConfigCommand::Reset => reset(),
    }
}

fn show() -> ocgen::Result<(ConfigOutput, i32)> {
    let session = session::load()?;
    let resolved = session.resolved_config();

    Ok((
        ConfigOutput {
            command: "config.show".to_string(),
            codename_mode: Some(session.codename_mode),
            resolved: Some(resolved),
            session: Some(session),
            ..Default::default()
        },
        0,
    ))
}

fn set(args: DynamicSetArgs) -> ocgen::Result<(ConfigOutput, i32)> {
    let spec = args.json_spec();
    let has_input = spec.is_some() || !args.extra.is_empty();
    if !has_input {
        return Err(ocgen::Error::validation_invalid_argument(
            "spec",
            "Provide JSON spec, --json flag, or --key value flags",
            None,
        ));
    }

    let merged = crate::commands::merge_json_sources(spec, &args.extra)?;
    let updated: Vec<String> = merged
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();

    let patch = ConfigPatch::from_value(merged)?;

    let mut session = session::load()?;
    session.apply(patch);
    session::save(&session)?;

    Ok((
        ConfigOutput {
            command: "config.set".to_string(),
            updated: Some(updated),
            codename_mode: Some(session.codename_mode),
            resolved: Some(session.resolved_config()),
            session: Some(session),
            ..Default::default()
        },
        0,
    ))
}

fn reset() -> ocgen::Result<(ConfigOutput, i32)> {
    let session = session::reset()?;
    log_status!("config", "Session reset to defaults");

    Ok((
        ConfigOutput {
            command: "config.reset".to_string(),
            codename_mode: Some(session.codename_mode),
            resolved: Some(session.resolved_config()),
            session: Some(session),
            ..Default::default()
        },
        0,
    ))
}
