use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "class-loader")]
#[command(about = "Resolve class names to source files across configured directory levels, subdirectories and extensions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long = "level", value_name = "DIR")]
    pub levels: Vec<String>,

    #[arg(long = "subdir", value_name = "DIR")]
    pub sub_dirs: Vec<String>,

    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    #[arg(long, value_name = "DIR")]
    pub scan_subdirs: Option<PathBuf>,

    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    Resolve {
        #[arg(value_name = "NAME", required = true)]
        class_names: Vec<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    Scan {
        #[arg(value_name = "DIR")]
        path: PathBuf,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
    Code,
}
