// src/main.rs
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rect_clip::{
    ClipConfig, Scene, SegmentAlgorithm,
    debug::visualization::{RenderConfig, render_scene_svg, save_scene_svg},
    handle_clip_request,
    io::ClipResponse,
};
use std::{
    io::Read,
    path::{Path, PathBuf},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rect-clip")]
#[command(about = "Clip line segments and polygons against an axis-aligned window")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clip a text scene and print the result as JSON
    Clip {
        /// Scene file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Also render input and result to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Segment clipping algorithm
        #[arg(short, long, value_enum, default_value = "cohen-sutherland")]
        algorithm: AlgorithmArg,

        /// Decimal digits kept in clipped polygon vertices
        #[arg(short, long, default_value = "3")]
        precision: u32,
    },

    /// Answer a JSON clip request and print the JSON response
    Request {
        /// Request file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Print the built-in example scene
    Example,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    /// Outcode-based, one boundary per step
    CohenSutherland,
    /// Parametric, all four half-planes at once
    LiangBarsky,
}

impl From<AlgorithmArg> for SegmentAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::CohenSutherland => SegmentAlgorithm::CohenSutherland,
            AlgorithmArg::LiangBarsky => SegmentAlgorithm::LiangBarsky,
        }
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clip {
            file,
            svg,
            algorithm,
            precision,
        } => {
            let input = read_input(file.as_deref())?;
            let scene = Scene::parse(&input).context("Invalid scene")?;
            let config = ClipConfig::new()
                .with_segment_algorithm(algorithm.into())
                .with_precision(precision);
            let clipped = scene.clip(&config)?;

            if let Some(path) = svg {
                let document = render_scene_svg(&scene, Some(&clipped), &RenderConfig::default())?;
                save_scene_svg(&path, &document)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }

            let response = ClipResponse::from(&clipped);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Request { file } => {
            let body = read_input(file.as_deref())?;
            let response = handle_clip_request(&body);
            println!("{}", response.body);
            if !response.is_success() {
                anyhow::bail!("Request rejected with status {}", response.status);
            }
            info!("Request answered with status {}", response.status);
        }

        Commands::Example => {
            print!("{}", Scene::example().to_text());
        }
    }

    Ok(())
}
