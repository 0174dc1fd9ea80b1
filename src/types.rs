use clap::Parser;
use std::path::PathBuf;

/// How each checked URL is reported on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Every required header with its Present/Missing status.
    Full,
    /// Only URLs lacking at least one header, with the missing names.
    MissingOnly,
}

/// CLI arguments structure
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // INPUT
    /// URLs to check. A URL without a scheme is requested over http://.
    #[arg(help_heading = "INPUT")]
    pub urls: Vec<String>,

    /// File containing a list of URLs, one per line.
    #[arg(short, long, help_heading = "INPUT")]
    pub input: Option<PathBuf>,

    // NETWORK
    /// Skip SSL certificate verification.
    #[arg(long, default_value_t = false, help_heading = "NETWORK")]
    pub skip_ssl: bool,

    // OUTPUT
    /// Display only missing headers with URLs.
    #[arg(long, help_heading = "OUTPUT")]
    pub missing: bool,

    /// Export results to a CSV file.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,

    /// Enable debug logging.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,
}

impl Cli {
    pub fn display_mode(&self) -> DisplayMode {
        if self.missing {
            DisplayMode::MissingOnly
        } else {
            DisplayMode::Full
        }
    }

    /// CSV export path; an empty `--output=` counts as no export.
    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Input file path; an empty `--input=` counts as no file.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}
