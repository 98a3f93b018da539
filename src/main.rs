use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw,
}

mod commands;
mod output;
mod tty;

use commands::{config, field, generate, preview, tree};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "ocgen")]
#[command(version = VERSION)]
#[command(about = "CLI for scaffolding OpenCart 3 extension packages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or edit the extension configuration
    Config(config::ConfigArgs),
    /// Manage the custom-field list
    #[command(visible_alias = "fields")]
    Field(field::FieldArgs),
    /// Show the planned archive layout
    Tree(tree::TreeArgs),
    /// Render a single artifact as text
    Preview(preview::PreviewArgs),
    /// Assemble the extension archive
    Generate(generate::GenerateArgs),
    /// List available commands (alias for --help)
    List,
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Preview(_) => ResponseMode::Raw,
        Commands::Tree(args) if tree::is_text(args) => ResponseMode::Raw,
        Commands::List => ResponseMode::Raw,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let mode = response_mode(&cli.command);

    if matches!(cli.command, Commands::List) {
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        cmd.print_help().expect("Failed to print help");
        println!();
        return std::process::ExitCode::SUCCESS;
    }

    if let ResponseMode::Raw = mode {
        let raw_result = commands::run_markdown(cli.command, &global);

        match raw_result {
            Ok((content, exit_code)) => {
                print!("{}", content);
                return std::process::ExitCode::from(exit_code_to_u8(exit_code));
            }
            Err(err) => {
                output::print_result::<serde_json::Value>(Err(err)).ok();
                return std::process::ExitCode::from(exit_code_to_u8(1));
            }
        }
    }

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    output::print_json_result(json_result).ok();

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
