use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use monodither::{
    config::ProcessConfig, dithering::DitherMethod, error::Result, run, utils::image,
};

#[derive(Parser)]
#[command(name = "monodither")]
#[command(about = "Dither an image down to pure black and white", long_about = None)]
struct Cli {
    /// Image to read
    input: PathBuf,

    /// Where to write the result, format follows the extension
    output: PathBuf,

    /// JSON process config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// none, basic, floyd_steinberg, bayer_2x2, bayer_4x4 or bayer_8x8
    #[arg(short, long)]
    method: Option<String>,

    /// Nearest neighbour upscale factor applied after dithering
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    scale: Option<u32>,
}

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ProcessConfig::read_config(path)?,
        None => ProcessConfig::default(),
    };
    if let Some(name) = &cli.method {
        config.dithering_type = DitherMethod::from_name(name);
    }
    if let Some(scale) = cli.scale {
        config.output_scale = scale;
    }

    let source = image::read_image(&cli.input)?;
    tracing::info!(
        input = %cli.input.display(),
        width = source.width(),
        height = source.height(),
        method = %config.dithering_type,
        "loaded image"
    );

    let processed = run(&config, source)?;
    image::write_image(&processed, &cli.output)?;
    tracing::info!(output = %cli.output.display(), "wrote image");

    Ok(())
}
