pub mod build;
pub mod completions;
pub mod init;
pub mod list;

use clap::{Parser, Subcommand};

/// omsidoc - HTML reference generator for OMSI scripts
#[derive(Parser, Debug)]
#[command(name = "omsidoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the HTML reference for a script folder
    Build(build::BuildArgs),

    /// List the files a build would read
    List(list::ListArgs),

    /// Initialize a project (generates omsidoc.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
