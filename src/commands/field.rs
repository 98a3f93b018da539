use clap::{Args, Subcommand};
use serde::Serialize;

use ocgen::field::{Field, FieldKind};
use ocgen::session;

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<Field>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

#[derive(Args)]
pub struct FieldArgs {
    #[command(subcommand)]
    command: FieldCommand,
}

#[derive(Subcommand)]
enum FieldCommand {
    /// Append a field (text, textarea, select, toggle, or image)
    Add {
        /// Field kind
        kind: String,

        /// Display label (defaults to "Field N")
        #[arg(long)]
        label: Option<String>,

        /// Form-field key (defaults to "field_N"; stored as supplied)
        #[arg(long)]
        key: Option<String>,
    },
    /// Edit a field's label and/or key
    #[command(visible_alias = "edit")]
    Set {
        /// Field id
        id: u64,

        /// New display label
        #[arg(long)]
        label: Option<String>,

        /// New form-field key (stored as supplied)
        #[arg(long)]
        key: Option<String>,
    },
    /// Remove a field by id
    #[command(visible_alias = "delete")]
    Remove {
        /// Field id
        id: u64,
    },
    /// List configured fields
    List,
}

pub fn run(
    args: FieldArgs,
    _global: &crate::commands::GlobalArgs,
) -> ocgen::Result<(FieldOutput, i32)> {
    match args.command {
        FieldCommand::Add { kind, label, key } => add(&kind, label, key),
        FieldCommand::Set { id, label, key } => set(id, label, key),
        FieldCommand::Remove { id } => remove(id),
        FieldCommand::List => list(),
    }
}

fn add(kind: &str, label: Option<String>, key: Option<String>) -> ocgen::Result<(FieldOutput, i32)> {
    let kind: FieldKind = kind.parse()?;

    let mut session = session::load()?;
    let added = session.add_field(kind);
    let field = if label.is_some() || key.is_some() {
        session.update_field(added.id, label, key)?
    } else {
        added
    };
    session::save(&session)?;

    Ok((
        FieldOutput {
            command: "field.add".to_string(),
            field: Some(field),
            count: Some(session.fields.len()),
            ..Default::default()
        },
        0,
    ))
}

fn set(id: u64, label: Option<String>, key: Option<String>) -> ocgen::Result<(FieldOutput, i32)> {
    if label.is_none() && key.is_none() {
        return Err(ocgen::Error::validation_missing_argument(vec![
            "--label".to_string(),
            "--key".to_string(),
        ]));
    }

    let mut session = session::load()?;
    let field = session.update_field(id, label, key)?;
    session::save(&session)?;

    Ok((
        FieldOutput {
            command: "field.set".to_string(),
            field: Some(field),
            ..Default::default()
        },
        0,
    ))
}

fn remove(id: u64) -> ocgen::Result<(FieldOutput, i32)> {
    let mut session = session::load()?;
    let removed = session.remove_field(id)?;
    session::save(&session)?;

    Ok((
        FieldOutput {
            command: "field.remove".to_string(),
            field: Some(removed),
            count: Some(session.fields.len()),
            ..Default::default()
        },
        0,
    ))
}

fn list() -> ocgen::Result<(FieldOutput, i32)> {
    let session = session::load()?;

    Ok((
        FieldOutput {
            command: "field.list".to_string(),
            count: Some(session.fields.len()),
            fields: Some(session.fields),
            ..Default::default()
        },
        0,
    ))
}
