use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexgrid::{
    timed, BoardRenderer, HexGrid, MapConstants, OffsetCoord, Point,
};
use log::{info, warn, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for querying the hexgrid coordinate engine. Every command prints its
/// result as JSON.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a file that defines the map constants. Any field left out
    /// falls back to the default board. Supported formats: JSON, TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, Display, StructOpt)]
#[strum(serialize_all = "snake_case")]
enum Command {
    /// Number of steps between two cells
    Distance {
        from_col: i32,
        from_row: i32,
        to_col: i32,
        to_row: i32,
    },
    /// Path of on-map cells leading from one cell to another
    Path {
        from_col: i32,
        from_row: i32,
        to_col: i32,
        to_row: i32,
    },
    /// All on-map cells within some number of steps of a cell
    Neighbors {
        col: i32,
        row: i32,
        max_distance: u32,
    },
    /// The on-map cells closest to a cell, nearest first
    Closest { col: i32, row: i32, count: usize },
    /// On-map cells exactly some number of steps from a cell, in ring order
    Ring { col: i32, row: i32, radius: u32 },
    /// Pixel position and outline of a cell on the map background
    Pixel {
        col: i32,
        row: i32,
        /// Distance from the center of the cell to its corners. Defaults to
        /// the hex radius from the map constants.
        #[structopt(long)]
        radius: Option<f64>,
    },
    /// Print the effective map constants
    Constants {
        /// Output format. Supported formats: json, toml
        #[structopt(short, long, default_value = "json")]
        format: ConstantsFormat,
    },
}

/// Formats that the map constants can be printed in
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum ConstantsFormat {
    Json,
    Toml,
}

/// Output of the `pixel` command
#[derive(Debug, Serialize)]
struct PixelOutput {
    center: Point,
    corners: [Point; 6],
}

fn load_constants(config_path: &Path) -> anyhow::Result<MapConstants> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn to_json(value: &impl Serialize) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("error serializing output")
}

/// Fail if any of the given cells is off the map
fn require_on_map(grid: &HexGrid, cells: &[OffsetCoord]) -> anyhow::Result<()> {
    for cell in cells {
        if !grid.contains(*cell) {
            bail!(
                "{} is off the {}x{} map",
                cell,
                grid.constants().grid_width,
                grid.constants().grid_height
            );
        }
    }
    Ok(())
}

/// Run a single query and render its output
fn execute(command: &Command, constants: MapConstants) -> anyhow::Result<String> {
    let grid = HexGrid::new(constants).context("invalid map constants")?;

    match *command {
        Command::Distance {
            from_col,
            from_row,
            to_col,
            to_row,
        } => {
            let from = OffsetCoord::new(from_col, from_row);
            let to = OffsetCoord::new(to_col, to_row);
            require_on_map(&grid, &[from, to])?;
            to_json(&grid.offset_distance(from, to))
        }
        Command::Path {
            from_col,
            from_row,
            to_col,
            to_row,
        } => {
            let from = OffsetCoord::new(from_col, from_row);
            let to = OffsetCoord::new(to_col, to_row);
            require_on_map(&grid, &[from, to])?;
            to_json(&grid.build_path(from, to))
        }
        Command::Neighbors {
            col,
            row,
            max_distance,
        } => {
            let center = OffsetCoord::new(col, row);
            require_on_map(&grid, &[center])?;
            to_json(&grid.neighbors_within_distance(center, max_distance))
        }
        Command::Closest { col, row, count } => {
            let center = OffsetCoord::new(col, row);
            require_on_map(&grid, &[center])?;
            let closest = grid.closest_neighbors(center, count);
            if closest.len() < count {
                warn!(
                    "Only found {} of {} requested neighbors",
                    closest.len(),
                    count
                );
            }
            to_json(&closest)
        }
        Command::Ring { col, row, radius } => {
            let center = OffsetCoord::new(col, row);
            require_on_map(&grid, &[center])?;
            to_json(&grid.ring(center, radius))
        }
        Command::Pixel { col, row, radius } => {
            let cell = OffsetCoord::new(col, row);
            require_on_map(&grid, &[cell])?;
            let renderer = BoardRenderer::new(constants)
                .context("invalid map constants")?;
            let radius = radius.unwrap_or(constants.hex_radius);
            to_json(&PixelOutput {
                center: renderer.offset_to_pixel(cell),
                corners: renderer.offset_polygon_corners(cell, radius),
            })
        }
        Command::Constants {
            format: ConstantsFormat::Json,
        } => to_json(grid.constants()),
        Command::Constants {
            format: ConstantsFormat::Toml,
        } => toml::to_string_pretty(grid.constants())
            .context("error serializing constants"),
    }
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let constants = match &opt.config {
        Some(config_path) => {
            let constants = load_constants(config_path)?;
            info!("Loaded map constants from {:?}", config_path);
            constants
        }
        None => MapConstants::default(),
    };

    let output = timed!(
        format!("Running {} query", opt.command),
        log::Level::Info,
        execute(&opt.command, constants)
    )?;
    println!("{}", output);

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
