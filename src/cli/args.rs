//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Masthead page runtime CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: masthead.toml)
    #[arg(short = 'C', long, default_value = "masthead.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default masthead.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Classify page URLs into language and page type
    #[command(visible_alias = "c")]
    Classify {
        #[command(flatten)]
        args: ClassifyArgs,
    },

    /// Rewrite qualifying images in HTML files
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },

    /// Report the full page plan for one URL
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
}

/// Classify command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// URLs or paths to classify. Use `-` to read from stdin (one per line).
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Classify as an error page (forces the blank type)
    #[arg(short, long)]
    pub error_page: bool,

    /// Output one JSON object per line instead of text
    #[arg(short, long)]
    pub json: bool,
}

/// Optimize command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// HTML files or directories to rewrite
    #[arg(value_name = "PATH", required = true, value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Page URL used for classification (default: derived from each file path)
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Viewport width in CSS pixels
    #[arg(short, long, default_value_t = 1280)]
    pub width: u32,

    /// Device pixel ratio
    #[arg(short, long, default_value_t = 1.0)]
    pub dpr: f64,

    /// Also append the planned page resources to each document head
    #[arg(short, long)]
    pub resources: bool,

    /// Output directory (default: rewrite files in place)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Plan command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PlanArgs {
    /// Page URL to plan for
    #[arg(value_name = "URL", value_hint = clap::ValueHint::Url)]
    pub url: String,

    /// Plan as an error page (forces the blank type)
    #[arg(short, long)]
    pub error_page: bool,

    /// HTML file backing the page (enables DX detection)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub html: Option<PathBuf>,

    /// Remembered region language (as persisted by the region picker)
    #[arg(short, long)]
    pub stored_lang: Option<String>,

    /// Output JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_classify(&self) -> bool {
        matches!(self.command, Commands::Classify { .. })
    }
    pub const fn is_optimize(&self) -> bool {
        matches!(self.command, Commands::Optimize { .. })
    }
    pub const fn is_plan(&self) -> bool {
        matches!(self.command, Commands::Plan { .. })
    }
}
