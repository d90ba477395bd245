use clap::{Parser, Subcommand};
use iconforge::catalog::Platform;
use iconforge::imaging::{RustBackend, calculations, identify};
use iconforge::{archive, config, output, pipeline};
use std::path::PathBuf;

/// Flags for the build command.
#[derive(clap::Args)]
struct BuildArgs {
    /// Source image (PNG, JPEG, WebP or TIFF)
    image: PathBuf,

    /// Platforms to build, comma-separated
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = Platform::ALL)]
    platforms: Vec<Platform>,

    /// Skip palette quantization — keep the resampled icons as-is
    #[arg(long)]
    no_optimize: bool,

    /// Directory the archive is written into
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Config file for manifest constants (see 'iconforge gen-config')
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "iconforge")]
#[command(about = "Multi-platform icon set generator")]
#[command(long_about = "\
Multi-platform icon set generator

Takes one source image and produces a zip of platform-ready icon sets:
every size resampled from a single square normalized base, optionally
palette-quantized, laid out in the folder conventions each platform's
tooling expects.

Archive layout:

  icons/
  ├── android/mipmap-*/ic_launcher.png       # density buckets + play-store
  ├── ios/AppIcon.appiconset/                # with Contents.json
  ├── windows/{tiles,taskbar}/
  ├── browser/favicon/                       # with manifest.json
  ├── macos/AppIcon.iconset/                 # iconutil-ready
  └── linux/hicolor/{n}x{n}/apps/
  README.md                                  # usage notes + statistics

Run 'iconforge platforms' to list every size, and 'iconforge gen-config'
to generate a documented iconforge.toml.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: normalize → resize → optimize → package
    Build(BuildArgs),
    /// Decode an image and report its dimensions without building
    Check {
        /// Source image
        image: PathBuf,
    },
    /// Print the platform catalog
    Platforms,
    /// Print a stock iconforge.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => {
            let config = config::load_config(args.config.as_deref())?;
            let source = std::fs::read(&args.image)?;
            let backend = RustBackend::new();

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_pipeline_event(&event) {
                        println!("{}", line);
                    }
                }
            });

            let mut variants = pipeline::generate(&backend, &source, &args.platforms, Some(&tx));
            if !variants.is_empty() && !args.no_optimize {
                variants = pipeline::optimize(&backend, variants, Some(&tx));
            }
            drop(tx);
            printer.join().unwrap();

            if variants.is_empty() {
                return Err("no icons could be generated from the source image".into());
            }

            let bytes = archive::package(&variants, &config)?;
            std::fs::create_dir_all(&args.output)?;
            let path = args.output.join(archive::archive_file_name());
            std::fs::write(&path, &bytes)?;

            output::print_summary(&variants);
            println!("==> Archive written: {}", path.display());
        }
        Command::Check { image } => {
            let bytes = std::fs::read(&image)?;
            let dims = identify(&bytes)?;
            let side = calculations::normalized_side(dims.width, dims.height);
            println!("{}: {}x{} px", image.display(), dims.width, dims.height);
            println!("Normalized base: {side}x{side} px");
        }
        Command::Platforms => {
            output::print_platform_list();
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
