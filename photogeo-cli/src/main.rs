//! PhotoGeo CLI - Command-line interface
//!
//! Renders the preview surface for a geotagged photo: the photo on top,
//! a map of where it was taken below, saved as a PNG.

use clap::Parser;
use photogeo::config::PreviewConfig;
use photogeo::logging;
use photogeo::preview::PreviewSession;
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "photogeo")]
#[command(about = "Render a photo preview with a map of where it was taken", long_about = None)]
struct Args {
    /// Path to the photo (JPEG, PNG, TIFF or WebP)
    photo: PathBuf,

    /// Output PNG path
    #[arg(long, default_value = "preview.png")]
    output: PathBuf,

    /// Preview surface width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Preview surface height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// Map zoom level (0-19)
    #[arg(long, default_value = "15")]
    zoom: u8,

    /// Alternate slippy-map tile endpoint base URL
    #[arg(long)]
    tile_url: Option<String>,

    /// Per-tile download timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,
}

fn main() {
    let args = Args::parse();

    let _logging_guard =
        match logging::init_logging(logging::default_log_dir(), logging::default_log_file()) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Error initializing logging: {}", e);
                process::exit(1);
            }
        };

    if args.width == 0 || args.height == 0 {
        eprintln!("Error: preview dimensions must be non-zero");
        process::exit(1);
    }

    let mut config = PreviewConfig::new()
        .with_zoom(args.zoom)
        .with_timeout_secs(args.timeout);
    if let Some(tile_url) = &args.tile_url {
        config = config.with_tile_base_url(tile_url);
    }

    let mut session = match PreviewSession::new(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error creating preview session: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = session.load(&args.photo) {
        eprintln!("Error loading {}: {}", args.photo.display(), e);
        process::exit(1);
    }

    if let Some(metadata) = session.metadata() {
        if let Some(camera) = metadata.camera_name() {
            println!("Camera: {}", camera);
        }
        if let Some(taken_at) = &metadata.taken_at {
            println!("Taken: {}", taken_at);
        }
        match metadata.coordinate {
            Some(coordinate) => println!("Location: {}", coordinate),
            None => println!("Location: no GPS data"),
        }
    }

    // render() only yields None before a load, and load just succeeded.
    let Some(surface) = session.render(args.width, args.height) else {
        eprintln!("Error: no preview surface produced");
        process::exit(1);
    };

    if let Err(e) = surface
        .to_rgba()
        .save_with_format(&args.output, image::ImageFormat::Png)
    {
        eprintln!("Error writing {}: {}", args.output.display(), e);
        process::exit(1);
    }

    info!(output = %args.output.display(), width = args.width, height = args.height, "preview saved");
    println!(
        "Saved {}x{} preview to {}",
        args.width,
        args.height,
        args.output.display()
    );
}
