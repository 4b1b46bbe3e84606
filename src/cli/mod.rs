pub mod build;
pub mod completions;
pub mod init;

use clap::{Parser, Subcommand};

/// iconfont - icon component and webfont stylesheet generator
#[derive(Parser, Debug)]
#[command(name = "iconfont")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate icon components and the embedded-font stylesheet
    Build(build::BuildArgs),

    /// Create a starter iconfont.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
