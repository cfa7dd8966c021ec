//! CLI module for the Homeworth API

pub mod serve;

use clap::{Parser, Subcommand};

/// Homeworth - house price estimation web service
#[derive(Parser)]
#[command(name = "homeworth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve,
}
