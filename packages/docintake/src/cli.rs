//! Command line arguments backing the `docintake` binary.
use clap::{Parser, Subcommand};
use docintake_vision::config::{API_KEY_ENV, ENDPOINT_ENV};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  name = "docintake",
  about = "Validate profile photos and read user data off scanned ID documents",
  version
)]
pub struct Args {
  /// Vision service endpoint, e.g. https://<resource>.cognitiveservices.azure.com
  #[arg(long, env = ENDPOINT_ENV, global = true)]
  pub endpoint: Option<String>,

  /// Vision service subscription key
  #[arg(long, env = API_KEY_ENV, hide_env_values = true, global = true)]
  pub api_key: Option<String>,

  /// Replay a recorded scene analysis response instead of calling the service
  #[arg(long, global = true)]
  pub scene_json: Option<PathBuf>,

  /// Replay a recorded OCR response instead of calling the service
  #[arg(long, global = true)]
  pub ocr_json: Option<PathBuf>,

  /// Log pipeline details to stderr
  #[arg(long, short = 'v', global = true)]
  pub verbose: bool,

  #[command(subcommand)]
  pub command: Commands,
}

impl Args {
  /// Replay mode is selected as soon as either recording is given.
  pub fn replay(&self) -> bool {
    self.scene_json.is_some() || self.ocr_json.is_some()
  }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print version information
  Version,
  /// Check whether an image is acceptable as a profile photo
  Validate {
    /// Image file to check
    image: PathBuf,
  },
  /// Extract portrait and names from a scanned document
  Extract {
    /// Scanned document image
    image: PathBuf,

    /// Write the cropped portrait PNG to this path
    #[arg(long, short = 'o')]
    portrait_out: Option<PathBuf>,
  },
}
