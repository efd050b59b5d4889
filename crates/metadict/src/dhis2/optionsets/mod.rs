use crate::prelude::*;

pub mod discover;
pub mod export;
pub mod list;

// Re-export the discovery data functions used by both subcommands
pub use discover::{discover_option_set_filters, discover_option_sets, OnPageError};

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List discovered option sets
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Export the option set dictionary to a spreadsheet file
    #[clap(name = "export")]
    Export(export::ExportOptions),
}

pub async fn run(command: Commands, global: crate::Global) -> Result<()> {
    match command {
        Commands::List(options) => list::run(options, global).await,
        Commands::Export(options) => export::run(options, global).await,
    }
}
