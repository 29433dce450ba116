pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod track;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start an interactive timing session")]
    Track,
    #[command(about = "Show the work history grouped by day")]
    List,
    #[command(about = "Delete a work log by id")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export the work history to CSV")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Track => track::cmd().await,
            Commands::List => list::cmd(),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
