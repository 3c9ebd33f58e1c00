use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Builds n-gram fact bases from chat exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge every export's messages per author into users.json
    Export(cmd::export::ExportArgs),
    /// Build word and n-gram frequency models from users.json
    Generate(cmd::generate::GenerateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export(args) => cmd::export::run(args),
        Commands::Generate(args) => cmd::generate::run(args),
    };

    match result {
        Ok(()) => info!("✅ Done"),
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
