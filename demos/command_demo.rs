use ringgauge::window::{self, WindowConfig};
use ringgauge::{Color, Gauge, GaugeCommand, GaugeConfig, Rasterizer};
use rand::Rng;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GaugeConfig::builder()
        .radius(60.0)
        .thickness(8.0)
        .fill(Color::rgb(0xff, 0x80, 0x00))
        .build();
    let gauge = Gauge::new(config)?;

    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let mut rng = rand::rng();
        loop {
            let commands = [
                GaugeCommand::SetPercent(rng.random_range(0.0..100.0)),
                GaugeCommand::SetFill(Color::rgb(
                    rng.random_range(0..=255),
                    rng.random_range(0..=255),
                    rng.random_range(0..=255),
                )),
            ];

            if commands.iter().any(|cmd| sender.send(cmd.clone()).is_err()) {
                break;
            }

            thread::sleep(Duration::from_millis(500));
        }
    });

    println!("Displaying a gauge with a random value and color every 500ms");
    println!("Pass a font path as the first argument to draw the label");
    println!("Press Ctrl+C to exit");

    let mut rasterizer = Rasterizer::new();
    if let Some(path) = std::env::args().nth(1) {
        rasterizer = rasterizer.with_font(std::fs::read(path)?)?;
    }

    let window_config = WindowConfig::builder().title("Command demo".to_string()).build();
    window::show(gauge, &window_config, rasterizer, Some(receiver))?;
    Ok(())
}
