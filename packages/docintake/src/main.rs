mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Commands};
use docintake::{AzureVisionClient, DocumentIntake, ReplayVisionService, VisionConfig, VisionService};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status of `validate` when the photo has no face.
const EXIT_NOT_VALID: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
  let args = Args::parse();
  init_tracing(args.verbose);

  match run(args).await {
    Ok(code) => code,
    Err(e) => {
      eprintln!("Error: {:#}", e);
      ExitCode::FAILURE
    }
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

async fn run(args: Args) -> Result<ExitCode> {
  if let Commands::Version = args.command {
    println!("docintake {}", env!("CARGO_PKG_VERSION"));
    return Ok(ExitCode::SUCCESS);
  }

  let vision = build_vision(&args)?;
  let intake = DocumentIntake::new(vision.as_ref());

  match args.command {
    Commands::Version => Ok(ExitCode::SUCCESS),
    Commands::Validate { image } => {
      let bytes = std::fs::read(&image).with_context(|| format!("Failed to read {}", image.display()))?;
      if intake.validate_photo(&bytes).await? {
        println!("valid");
        Ok(ExitCode::SUCCESS)
      } else {
        println!("not valid");
        Ok(ExitCode::from(EXIT_NOT_VALID))
      }
    }
    Commands::Extract { image, portrait_out } => {
      let bytes = std::fs::read(&image).with_context(|| format!("Failed to read {}", image.display()))?;
      let data = intake.extract_user_data(&bytes).await?;

      if let Some(path) = portrait_out {
        match &data.portrait_bytes {
          Some(portrait) => {
            std::fs::write(&path, portrait).with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %path.display(), "portrait written");
          }
          None => eprintln!("No portrait found, {} not written", path.display()),
        }
      }

      println!("{}", serde_json::to_string_pretty(&data)?);
      Ok(ExitCode::SUCCESS)
    }
  }
}

fn build_vision(args: &Args) -> Result<Box<dyn VisionService>> {
  if args.replay() {
    let mut replay = ReplayVisionService::new();
    if let Some(path) = &args.scene_json {
      let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
      replay = replay.with_scene(json);
    }
    if let Some(path) = &args.ocr_json {
      let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
      replay = replay.with_ocr(json);
    }
    debug!("using recorded vision responses");
    return Ok(Box::new(replay));
  }

  let endpoint = args
    .endpoint
    .clone()
    .context("No vision endpoint configured (use --endpoint or COGNITIVE_SERVICES_ENDPOINT)")?;
  let api_key = args
    .api_key
    .clone()
    .context("No vision api key configured (use --api-key or COMPUTER_VISION_KEY)")?;
  let client = AzureVisionClient::new(VisionConfig::new(endpoint, api_key)).context("Invalid vision service configuration")?;
  Ok(Box::new(client))
}
