use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::Rng;
use ringgauge::window::{self, WindowConfig};
use ringgauge::{Color, Gauge, GaugeCommand, GaugeConfig, Rasterizer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Show a circular percentage gauge, or export it as SVG.
#[derive(Parser, Debug)]
#[command(name = "ringgauge", version)]
struct Cli {
    /// Ring radius in gauge units
    #[arg(long, default_value_t = 50.0)]
    radius: f64,

    /// Stroke width of both arcs
    #[arg(long, default_value_t = 2.0)]
    thickness: f64,

    /// Fill color as #rrggbb or #rrggbbaa
    #[arg(long, default_value = "#1e90ff", value_parser = parse_color)]
    fill: Color,

    /// Initial percent value
    #[arg(long, default_value_t = 0.0)]
    percent: f64,

    /// TrueType/OpenType font used for the label
    #[arg(long)]
    font: Option<PathBuf>,

    /// Write the gauge as SVG to this path and exit
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Read percent values from stdin, one per line
    #[arg(long, conflicts_with = "demo")]
    stdin: bool,

    /// Drive the gauge with a random walk
    #[arg(long)]
    demo: bool,

    /// Window title
    #[arg(long, default_value = "Gauge")]
    title: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = GaugeConfig::builder()
        .radius(cli.radius)
        .thickness(cli.thickness)
        .fill(cli.fill)
        .build();
    let mut gauge = Gauge::new(config)?;
    gauge.set_percent(cli.percent)?;

    if let Some(path) = &cli.svg {
        std::fs::write(path, gauge.to_svg())?;
        info!(path = %path.display(), "wrote svg");
        return Ok(());
    }

    let mut rasterizer = Rasterizer::new();
    match &cli.font {
        Some(path) => rasterizer = rasterizer.with_font(std::fs::read(path)?)?,
        None => warn!("no --font given, the label will not be drawn"),
    }

    let receiver = if cli.stdin || cli.demo {
        let (sender, receiver) = mpsc::channel();
        if cli.stdin {
            thread::spawn(move || read_stdin(sender));
        } else {
            thread::spawn(move || random_walk(sender, cli.percent));
        }
        Some(receiver)
    } else {
        None
    };

    let window_config = WindowConfig::builder().title(cli.title).build();
    window::show(gauge, &window_config, rasterizer, receiver)?;
    Ok(())
}

fn parse_color(hex: &str) -> Result<Color, String> {
    Color::from_hex(hex).map_err(|err| err.to_string())
}

fn read_stdin(sender: Sender<GaugeCommand>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines().map_while(Result::ok) {
        match line.trim().parse::<f64>() {
            Ok(percent) => {
                if sender.send(GaugeCommand::SetPercent(percent)).is_err() {
                    break;
                }
            }
            Err(_) => warn!(line = %line.trim(), "not a number, skipped"),
        }
    }
}

/// Drifts toward a random target, picking a new one now and then.
fn random_walk(sender: Sender<GaugeCommand>, start: f64) {
    let mut rng = rand::rng();
    let mut percent = start.clamp(0.0, 100.0);
    let mut target = rng.random_range(0.0..100.0);
    loop {
        if rng.random_range(0.0..1.0) < 0.02 {
            target = rng.random_range(0.0..100.0);
        }
        percent += (target - percent) * 0.1;
        let rounded = (percent * 10.0).round() / 10.0;
        if sender.send(GaugeCommand::SetPercent(rounded)).is_err() {
            break;
        }
        thread::sleep(Duration::from_millis(50));
    }
}
