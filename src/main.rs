use boxfit::config::{self, ConfigOverrides};
use boxfit::{output, process};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Flags that override values from the config file.
#[derive(clap::Args, Clone, Default)]
struct ResizeArgs {
    /// Folder with the original images
    #[arg(long)]
    input: Option<PathBuf>,

    /// Folder for the resized images (created if missing)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Target box width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Target box height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Fit inside the box without letterbox padding
    #[arg(long)]
    no_pad: bool,

    /// Force an output format (JPEG, PNG, WEBP, BMP, TIFF)
    #[arg(long)]
    format: Option<String>,

    /// JPEG quality, 0-100
    #[arg(long)]
    quality: Option<u32>,
}

impl From<ResizeArgs> for ConfigOverrides {
    fn from(args: ResizeArgs) -> Self {
        Self {
            input_dir: args.input,
            output_dir: args.output,
            width: args.width,
            height: args.height,
            no_pad: args.no_pad,
            format: args.format,
            jpeg_quality: args.quality,
        }
    }
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "boxfit")]
#[command(about = "Batch-resize a folder of images to fit a box")]
#[command(long_about = "\
Batch-resize a folder of images to fit a box

Every png, jpg, jpeg, webp, bmp, tif and tiff file directly inside the input
folder is shrunk to fit the target box (aspect ratio kept, never enlarged),
optionally letterboxed onto an exact-size canvas, and written to the output
folder as <name>.<ext>. Files that fail are reported and skipped.

Settings come from ./boxfit.toml (or --config FILE) and are overridden by
flags. Run 'boxfit gen-config' to print a documented config file.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (default: ./boxfit.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    // No subcommand runs `resize` with the config file values
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resize every supported image in the input folder
    Resize(ResizeArgs),
    /// List what would be written, without writing anything
    Check(ResizeArgs),
    /// Print a stock boxfit.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Resize(ResizeArgs::default())) {
        Command::Resize(args) => {
            let config = config::load_config(cli.config.as_deref(), &ConfigOverrides::from(args))?;
            let result = process::process(&config, output::print_process_event)?;
            output::print_summary(&result);
        }
        Command::Check(args) => {
            let config = config::load_config(cli.config.as_deref(), &ConfigOverrides::from(args))?;
            let planned = process::check(&config)?;
            output::print_check_output(&planned, &config);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
