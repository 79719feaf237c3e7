//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Media Stills - Turn movie frames into fanart and thumbs
#[derive(Parser, Debug)]
#[command(name = "media-stills")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Path to a config.toml (default: user config directory)
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract stills and list them as artwork candidates
    Sample {
        /// Video file or disc folder
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Number of stills (overrides config)
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: Option<i32>,

        /// Start of the sampled range in percent (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        start: Option<i32>,

        /// End of the sampled range in percent (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        end: Option<i32>,

        /// Artwork type: all, background, thumb, poster, banner, clearlogo, disc
        #[arg(short = 't', long, default_value = "all")]
        artwork_type: String,

        /// Do not produce background/fanart candidates
        #[arg(long)]
        no_background: bool,

        /// Do not produce thumb candidates
        #[arg(long)]
        no_thumb: bool,

        /// Directory for extracted stills (overrides config)
        #[arg(long, value_name = "DIR")]
        scratch_dir: Option<PathBuf>,

        /// Write candidates as JSON to this file
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Show how a path resolves as a video source
    Probe {
        /// Video file or disc folder
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Check that ffmpeg and ffprobe are available
    Check,
}
