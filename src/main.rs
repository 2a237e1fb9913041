use clap::Parser;
use tracing::info;

use mandelbrot_atlas::{CliArgs, CliController, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args = CliArgs::parse();
    let request = args.to_request()?;

    let mut controller = CliController::new(PpmFilePresenter::new());
    controller.generate(&request)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    controller.write(&args.output)?;

    info!(path = %args.output.display(), "saved");
    Ok(())
}
