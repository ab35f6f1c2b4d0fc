use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "emscribe")]
#[command(version)]
#[command(about = "Catalog electron-microscopy sessions into structured records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment a session manifest into acquisition activities
    Segment {
        /// Path to the session manifest JSON
        #[arg(short, long)]
        manifest: String,

        /// Override the manifest's sample identifier
        #[arg(long)]
        sample_id: Option<String>,
    },

    /// Print version information
    Version,
}
