use clap::{Parser, Subcommand};
use plushify::artifact::{PlushSize, PlushStyle};
use plushify::gallery::{GalleryStore, SaveStatus};
use plushify::generation::{Generator, MockGenerator};
use plushify::upload::UploadStage;
use plushify::{config, export, output};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plushify")]
#[command(about = "Turn photos into plushie designs, locally")]
#[command(long_about = "\
Turn photos into plushie designs, locally

Everything lives in one studio data directory:

  <data-dir>/
  ├── config.toml              # Studio config (optional)
  ├── plushify-gallery.json    # Gallery ledger (owned by the store)
  ├── originals/               # Source photos kept with their plushies
  └── staging/                 # Transient validated uploads

The generate flow validates a photo (JPEG/PNG/WebP, 10 MiB max), runs the
simulated generation backend, and records the result in the gallery.
Favorites and deletion work on gallery ids; 'export' renders the gallery
as a static HTML page you can drop on any file server.

Run 'plushify gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Studio data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a photo against the upload rules without generating
    Check {
        /// Photo to validate
        image: PathBuf,
    },
    /// Generate a plushie design from a photo and add it to the gallery
    Generate {
        /// Source photo (JPEG, PNG, or WebP, up to 10 MiB)
        image: PathBuf,
        /// Plushie style (defaults to config)
        #[arg(long, value_enum)]
        style: Option<PlushStyle>,
        /// Plushie size (defaults to config)
        #[arg(long, value_enum)]
        size: Option<PlushSize>,
    },
    /// List the gallery
    Gallery {
        /// Only show favorites
        #[arg(long)]
        favorites: bool,
    },
    /// Toggle the favorite flag on a plushie
    Favorite {
        /// Gallery id (e.g. plushie_1703030400000)
        id: String,
    },
    /// Delete a plushie from the gallery
    Delete {
        /// Gallery id
        id: String,
    },
    /// Export the gallery as a static HTML page
    Export {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);

    match cli.command {
        Command::Check { image } => {
            let mut stage = UploadStage::new(&data_dir.join("staging"))?;
            let (reference, error) = stage.select(Some(&image));
            if let Some(err) = error {
                // Rejected selections stage nothing, so exiting here leaks
                // no staged copy.
                println!("{err}");
                std::process::exit(1);
            }
            let staged = reference.expect("accepted upload has a reference");
            println!(
                "{} is a valid upload ({}, {} bytes)",
                image.display(),
                staged.media_type(),
                staged.size_bytes()
            );
            stage.clear();
        }
        Command::Generate { image, style, size } => {
            let config = config::load_config(&data_dir)?;
            let style = style.unwrap_or(config.generation.default_style);
            let size = size.unwrap_or(config.generation.default_size);

            let mut stage = UploadStage::new(&data_dir.join("staging"))?;
            let (reference, error) = stage.select(Some(&image));
            if let Some(err) = error {
                println!("{err}");
                std::process::exit(1);
            }
            let staged = reference.expect("accepted upload has a reference");
            let staged_path = staged.path().to_path_buf();
            let staged_ref = staged_path.display().to_string();
            let staged_ext = staged_path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("jpg")
                .to_string();

            println!("Generating {style} {size} plushie...");
            let mut generator = MockGenerator::new(config.user.id.as_str())
                .with_delay_ms(config.generation.min_delay_ms..config.generation.max_delay_ms);

            let mut artifact = match generator.generate(&staged_ref, style, size) {
                Ok(artifact) => artifact,
                Err(err) => {
                    println!("Generation failed: {err}");
                    println!("Your photo was not added to the gallery. Try again.");
                    // process::exit skips Drop; release the staged copy first.
                    stage.clear();
                    std::process::exit(1);
                }
            };

            // The staged copy is transient; keep the original with its record.
            let kept = format!("originals/{}.{staged_ext}", artifact.id);
            fs::create_dir_all(data_dir.join("originals"))?;
            fs::copy(&staged_path, data_dir.join(&kept))?;
            artifact.original_image = kept;

            let mut store = GalleryStore::load(&data_dir);
            if let SaveStatus::MemoryOnly(err) = store.add(artifact.clone()) {
                eprintln!("Warning: gallery could not be saved ({err})");
                eprintln!("The plushie is kept for this session only.");
            }
            output::print_generated(&artifact);
            stage.clear();
        }
        Command::Gallery { favorites } => {
            let store = GalleryStore::load(&data_dir);
            if favorites {
                let entries: Vec<_> = store.favorites().collect();
                output::print_gallery(&entries, "Favorites");
            } else {
                let entries: Vec<_> = store.entries().iter().collect();
                output::print_gallery(&entries, "Gallery");
            }
        }
        Command::Favorite { id } => {
            let mut store = GalleryStore::load(&data_dir);
            if store.get(&id).is_none() {
                println!("No plushie with id {id}");
                std::process::exit(1);
            }
            if let SaveStatus::MemoryOnly(err) = store.toggle_favorite(&id) {
                eprintln!("Warning: gallery could not be saved ({err})");
            }
            let flagged = store.get(&id).expect("entry was present").is_favorite;
            println!(
                "{id} is {} a favorite",
                if flagged { "now" } else { "no longer" }
            );
        }
        Command::Delete { id } => {
            let mut store = GalleryStore::load(&data_dir);
            let Some(entry) = store.get(&id) else {
                println!("No plushie with id {id}");
                std::process::exit(1);
            };
            // Kept originals go with their record.
            let kept_original = data_dir.join(&entry.original_image);
            if let SaveStatus::MemoryOnly(err) = store.delete(&id) {
                eprintln!("Warning: gallery could not be saved ({err})");
            }
            let _ = fs::remove_file(kept_original);
            println!("Deleted {id}");
        }
        Command::Export { output: output_dir } => {
            let config = config::load_config(&data_dir)?;
            let store = GalleryStore::load(&data_dir);
            let page = export::export(&store, &config, &output_dir)?;
            println!(
                "Exported {} plushies to {}",
                store.len(),
                page.display()
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the studio data directory: explicit flag, else the platform
/// data dir, else a local `plushify-data/`.
fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| {
        dirs::data_dir()
            .map(|base| base.join("plushify"))
            .unwrap_or_else(|| PathBuf::from("plushify-data"))
    })
}
