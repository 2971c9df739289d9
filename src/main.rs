use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tsgo_mcp::{checker, diagnostics, mcp, workspace};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "TypeScript type diagnostics over MCP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server over stdio
    Serve,

    /// Type-check the project containing a file and print diagnostics
    Check {
        /// Path to a TypeScript file in the project
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            mcp::run_server()?;
        }
        Commands::Check { file } => {
            let root = workspace::find_workspace_root(&file);
            let output = checker::run_checker(&root)?;
            let report = diagnostics::format_report(&diagnostics::parse_output(&output));
            println!("{}", report);
        }
    }

    Ok(())
}
