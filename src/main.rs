//! Masthead - page classification and adaptive image optimization for a
//! multi-locale blog.

#![allow(dead_code)]

mod analytics;
mod cli;
mod config;
mod core;
mod dom;
mod images;
mod logger;
mod regions;
mod resources;
mod runtime;
mod sidekick;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_site(&config, *dry),
        Commands::Classify { args } => cli::classify::run_classify(args),
        Commands::Optimize { args } => cli::optimize::run_optimize(args, &config),
        Commands::Plan { args } => cli::plan::run_plan(args, &config),
    }
}
