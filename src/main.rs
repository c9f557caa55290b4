use clap::{Parser, Subcommand, ValueEnum};
use gatito::{
    find_period, grid_from_image, image_from_grid, render_frames, reversal_iterations, transform,
    ViewMode, DEFAULT_PERIOD_BOUND, DISPLAY_DEPTH,
};
use image::ImageReader;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Gatito - Arnold Cat Map image scrambler
///
/// Scrambles square images with the discrete Arnold Cat Map, finds the
/// map's period for the image, and walks scrambled images back to the
/// original using nothing but iteration counts.
#[derive(Parser)]
#[command(name = "gatito")]
#[command(version = "1.0.0")]
#[command(about = "Arnold Cat Map image scrambler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Forward,
    Reversed,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Forward => ViewMode::Forward,
            ViewArg::Reversed => ViewMode::Reversed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a square image forward by a number of map iterations
    Scramble {
        /// Input image path (must be square)
        #[arg(short, long)]
        input: PathBuf,

        /// Output image path
        #[arg(short, long)]
        output: PathBuf,

        /// Number of forward iterations
        #[arg(short = 'n', long, default_value_t = DISPLAY_DEPTH)]
        iterations: u32,
    },
    /// Recover the original from a scrambled image via the map's period
    Unscramble {
        /// Scrambled image path
        #[arg(short, long)]
        input: PathBuf,

        /// Output image path
        #[arg(short, long)]
        output: PathBuf,

        /// Number of forward iterations the image was scrambled with
        #[arg(short = 'n', long, default_value_t = DISPLAY_DEPTH)]
        iterations: u32,

        /// Ceiling for the period search
        #[arg(short, long, default_value_t = DEFAULT_PERIOD_BOUND)]
        bound: u32,
    },
    /// Find the period of the map for an image
    Period {
        /// Input image path (must be square)
        #[arg(short, long)]
        input: PathBuf,

        /// Ceiling for the period search
        #[arg(short, long, default_value_t = DEFAULT_PERIOD_BOUND)]
        bound: u32,
    },
    /// Render the viewer frame strip as numbered PNG files
    Frames {
        /// Input image path (must be square)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the rendered frames
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Strip direction
        #[arg(short, long, value_enum, default_value_t = ViewArg::Forward)]
        view: ViewArg,

        /// Number of frames in the strip
        #[arg(short, long, default_value_t = DISPLAY_DEPTH)]
        depth: u32,

        /// Ceiling for the period search (reversed strips only)
        #[arg(short, long, default_value_t = DEFAULT_PERIOD_BOUND)]
        bound: u32,
    },
}

fn load_grid(path: &PathBuf) -> anyhow::Result<gatito::PixelGrid<u32>> {
    println!("[*] Loading image: {}", path.display());
    let image = ImageReader::open(path)?.decode()?;
    println!("[✓] Image loaded: {}x{}", image.width(), image.height());
    Ok(grid_from_image(&image)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scramble {
            input,
            output,
            iterations,
        } => {
            let grid = load_grid(&input)?;
            println!("[*] Applying {} cat map iterations...", iterations);
            let scrambled = transform(&grid, iterations)?;
            image_from_grid(&scrambled).save(&output)?;
            println!("[✓] Scrambled image saved to: {}", output.display());
        }

        Commands::Unscramble {
            input,
            output,
            iterations,
            bound,
        } => {
            let grid = load_grid(&input)?;
            println!("[*] Searching for the map period (bound {})...", bound);
            let period = find_period(&grid, bound)?;
            println!("[✓] Period found: {}", period);

            let back = reversal_iterations(period, iterations, 0)?;
            println!("[*] Walking {} iterations back to the original...", back);
            let recovered = transform(&grid, back)?;
            image_from_grid(&recovered).save(&output)?;
            println!("[✓] Recovered image saved to: {}", output.display());
        }

        Commands::Period { input, bound } => {
            let grid = load_grid(&input)?;
            println!("[*] Searching for the map period (bound {})...", bound);
            let period = find_period(&grid, bound)?;
            println!("[✓] Period: {} iterations return the image to itself", period);
        }

        Commands::Frames {
            input,
            out_dir,
            view,
            depth,
            bound,
        } => {
            let grid = load_grid(&input)?;
            let mode = ViewMode::from(view);

            // Forward strips never consult the period; skip the search
            let period = match mode {
                ViewMode::Forward => 0,
                ViewMode::Reversed => {
                    println!("[*] Searching for the map period (bound {})...", bound);
                    let period = find_period(&grid, bound)?;
                    println!("[✓] Period found: {}", period);
                    period
                }
            };

            println!("[*] Rendering {} frames...", depth);
            let frames = render_frames(&grid, depth, period, mode)?;

            fs::create_dir_all(&out_dir)?;
            frames
                .par_iter()
                .enumerate()
                .try_for_each(|(i, frame)| -> anyhow::Result<()> {
                    let path = out_dir.join(format!("frame_{:02}.png", i));
                    image_from_grid(frame).save(&path)?;
                    Ok(())
                })?;
            println!(
                "[✓] {} frames saved to: {}",
                frames.len(),
                out_dir.display()
            );
        }
    }

    Ok(())
}
