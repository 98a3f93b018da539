use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use ocgen::utils::io;
use ocgen::{log_status, package, session};

#[derive(Args)]
pub struct GenerateArgs {
    /// Directory to write the archive into
    #[arg(long, default_value = ".")]
    out: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutput {
    command: String,
    archive: String,
    files: usize,
    bytes: usize,
}

pub fn run(
    args: GenerateArgs,
    _global: &crate::commands::GlobalArgs,
) -> ocgen::Result<(GenerateOutput, i32)> {
    let session = session::load()?;
    let config = session.resolved_config();

    let entries = package::assemble(&config, &session.fields);
    let bytes = package::build_archive(&entries)?;

    let out_dir = PathBuf::from(shellexpand::tilde(&args.out).into_owned());
    std::fs::create_dir_all(&out_dir).map_err(|e| {
        ocgen::Error::internal_io(e.to_string(), Some("create output dir".to_string()))
    })?;

    let archive_path = out_dir.join(package::archive_name(&config));
    io::write_bytes(&archive_path, &bytes, "write archive")?;

    log_status!(
        "generate",
        "Packaged {} files into {}",
        entries.len(),
        archive_path.display()
    );

    Ok((
        GenerateOutput {
            command: "generate".to_string(),
            archive: archive_path.display().to_string(),
            files: entries.len(),
            bytes: bytes.len(),
        },
        0,
    ))
}
