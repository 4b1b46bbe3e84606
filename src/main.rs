use clap::Parser;
use iconfont::cli::{Cli, Commands};
use iconfont::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Build(args) => iconfont::cli::build::run(args, &printer)?,
        Commands::Init(args) => iconfont::cli::init::run(args, &printer)?,
        Commands::Completions(args) => iconfont::cli::completions::run(args)?,
    }

    Ok(())
}
