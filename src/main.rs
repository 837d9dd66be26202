use clap::Parser;
use miette::Result;
use omsidoc::cli::{Cli, Commands};
use omsidoc::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => omsidoc::cli::build::run(args, &printer)?,
        Commands::List(args) => omsidoc::cli::list::run(args, &printer)?,
        Commands::Init(args) => omsidoc::cli::init::run(args, &printer)?,
        Commands::Completions(args) => omsidoc::cli::completions::run(args)?,
    }

    Ok(())
}
