use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "schemadoc")]
#[command(about = "Embed XML schema files into a Word-importable HTML document")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: ./schemadoc.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the schema document
    Generate {
        /// Root directory holding the category subdirectories
        #[arg(long)]
        schemas_dir: Option<PathBuf>,

        /// Wrapper document with INSERT_XSD / END_XSD markers
        #[arg(long)]
        template: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List schema categories
    Categories {
        /// Resolve against a schema root and show file counts
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Write a starter config file
    Init,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
