use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};
use warhex::{timed, GridConfig, HexGrid, Point};

/// CLI for building hex map grids and looking up cells in them.
#[derive(Debug, StructOpt)]
#[structopt(name = "warhex")]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. If not given, the default grid is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Screen position(s) to look up in the grid, as `X,Y`. For each one,
    /// prints the cell under it, the cell's map label, and its neighbors.
    #[structopt(short, long, parse(try_from_str = parse_point))]
    locate: Vec<Point>,

    /// If given, the grid will be saved to this directory. The exact files
    /// that appear in the directory are defined by the output formats. See
    /// `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the grid in. Supported formats:
    ///
    /// cfg - The full config object used for the grid, in TOML format
    ///
    /// json - Screen geometry of every cell: label, center, and corners
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the grid's full config in a human-readable file
    Cfg,
    /// Export the grid's screen geometry, for renderers to consume
    Json,
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
        }
    }
}

/// Parse a screen position from an `X,Y` string
fn parse_point(s: &str) -> anyhow::Result<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected a point as X,Y, but got {:?}", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("invalid x coordinate {:?}", x))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("invalid y coordinate {:?}", y))?;
    let point = Point::new(x, y);
    if !point.is_finite() {
        bail!("point must be finite, but got {}", point);
    }
    Ok(point)
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Print what's under a screen position
fn locate(grid: &HexGrid, point: Point) {
    match grid.hex_at(point) {
        Some(hex) => {
            let label = grid
                .label(hex)
                .map(|label| label.to_string())
                .unwrap_or_default();
            let neighbors = grid
                .neighbors(hex)
                .map(|neighbor| neighbor.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "{} -> {} [{}] neighbors: {}",
                point, hex, label, neighbors
            );
        }
        None => println!("{} -> outside the grid", point),
    }
}

/// Generate an output form of the grid in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    grid: &HexGrid,
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        grid: &HexGrid,
    ) -> anyhow::Result<Vec<u8>> {
        Ok(match output_format {
            OutputFormat::Cfg => {
                // Serialize just the grid config via toml
                toml::to_string_pretty(grid.config())
                    .context("error serializing config")?
                    .into_bytes()
            }
            OutputFormat::Json => grid.to_json()?.into_bytes(),
        })
    }

    let output_file_path = output_dir
        .join("grid")
        .with_extension(output_format.file_ext());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(output_format, grid)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => {
            info!("No config given, using the default grid");
            GridConfig::default()
        }
    };
    let grid = HexGrid::new(config)?;
    info!("Built grid with {} cells", grid.len());

    for point in &opt.locate {
        locate(&grid, *point);
    }

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("error creating output dir {:?}", &output_dir)
        })?;

        for output_format in opt.output_formats {
            gen_output(&output_dir, output_format, &grid)?;
        }
    }

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
