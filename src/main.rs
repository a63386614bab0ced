//! Simplot - plot numbers from a file or standard input in the terminal.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use simplot::color::ColorPalette;
use simplot::data::{DataReader, DataSet};
use simplot::views::TiledView;
use simplot::SimplePlot;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Sequence,
    Points,
    Pixels,
}

#[derive(Parser, Debug)]
#[command(name = "simplot")]
#[command(about = "Plot a series or a grid of numbers in the terminal", long_about = None)]
struct Args {
    /// File of whitespace or comma separated numbers; standard input if omitted
    file: Option<PathBuf>,

    /// How to plot the data (sequence for a series, pixels for a grid by default)
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Plot title
    #[arg(long)]
    title: Option<String>,

    /// Horizontal axis label
    #[arg(long)]
    hlabel: Option<String>,

    /// Vertical axis label
    #[arg(long)]
    vlabel: Option<String>,

    /// Horizontal tic format, e.g. %1.2f
    #[arg(long)]
    hformat: Option<String>,

    /// Vertical tic format
    #[arg(long)]
    vformat: Option<String>,

    /// Add grid lines, optionally configured, e.g. "H-.V-."
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    grid: Option<String>,

    /// Add a color bar with an optional label
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    colorbar: Option<String>,

    /// Color palette of pixels (gray, jet, viridis, plasma, rainbow, bluered)
    #[arg(long)]
    palette: Option<String>,

    /// Print the plot once at WIDTHxHEIGHT instead of opening the viewer
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    headless: Option<Size>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

/// Size of a headless rendering in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Size {
    width: u16,
    height: u16,
}

fn parse_size(s: &str) -> std::result::Result<Size, String> {
    let (w, h) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w = w.parse::<u16>().map_err(|e| e.to_string())?;
    let h = h.parse::<u16>().map_err(|e| e.to_string())?;
    if w == 0 || h == 0 {
        return Err("width and height must be positive".to_string());
    }
    Ok(Size {
        width: w,
        height: h,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting simplot");
    }

    let data = match args.file {
        Some(ref path) => DataReader::read_file(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => DataReader::read(io::stdin().lock()).context("Failed to read standard input")?,
    };
    tracing::info!("loaded {}", data.describe());

    let mut plot = build_plot(&args, data)?;

    match args.headless {
        Some(size) => println!("{}", plot.to_text(size.width, size.height)),
        None => plot.show()?,
    }

    if args.log.is_some() {
        tracing::info!("simplot exited");
    }
    Ok(())
}

fn build_plot(args: &Args, data: DataSet) -> Result<SimplePlot> {
    let palette = match args.palette.as_deref() {
        Some(name) => match ColorPalette::from_name(name) {
            Some(palette) => Some(palette),
            None => bail!("Unknown palette '{}'", name),
        },
        None => None,
    };
    if palette.is_some() && matches!(data, DataSet::Series(_)) {
        return Err(simplot::PlotError::UnsupportedInput(
            "--palette applies to pixels only".to_string(),
        )
        .into());
    }

    let mut plot = match (data, args.mode) {
        (DataSet::Series(values), None | Some(Mode::Sequence)) => SimplePlot::as_sequence(&values),
        (DataSet::Series(values), Some(Mode::Points)) => SimplePlot::as_points(&values),
        (DataSet::Grid(f), None | Some(Mode::Pixels)) => {
            let plot = SimplePlot::as_pixels_array(f.view());
            if let Some(palette) = palette {
                for view in plot.plot_panel().views() {
                    view.borrow_mut().set_color_palette(palette);
                }
            }
            plot
        },
        (DataSet::Series(_), Some(Mode::Pixels)) => {
            return Err(simplot::PlotError::UnsupportedInput(
                "pixels need a grid of numbers".to_string(),
            )
            .into());
        },
        (DataSet::Grid(_), Some(mode)) => {
            return Err(simplot::PlotError::UnsupportedInput(format!(
                "{:?} plots need a single series",
                mode
            ))
            .into());
        },
    };

    if let Some(ref parameters) = args.grid {
        if parameters.is_empty() {
            plot.add_grid();
        } else {
            plot.add_grid_with(parameters)?;
        }
    }
    if let Some(ref label) = args.colorbar {
        plot.add_color_bar_labeled(label);
    }
    plot.set_title(args.title.as_deref());
    plot.set_h_label(args.hlabel.as_deref());
    plot.set_v_label(args.vlabel.as_deref());
    plot.set_h_format(args.hformat.as_deref());
    plot.set_v_format(args.vformat.as_deref());
    Ok(plot)
}
