use anyhow::Context;
use seatmap_cli::{run_flight, Config, OutputFormat};
use seatmap_flight::ConsoleCardPrinter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatmap=info,seatmap_cli=info,seatmap_flight=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let manifest_path = std::env::args().nth(1);
    let config = Config::load(manifest_path.as_deref()).context("Failed to load flight manifest")?;
    tracing::info!("Loaded {} flight(s) from manifest", config.flights.len());

    let mut snapshots = Vec::new();
    for manifest in &config.flights {
        let report = match run_flight(manifest) {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Skipping flight {}: {}", manifest.number, e);
                continue;
            }
        };
        for e in &report.rejected {
            eprintln!("{}: {}", report.flight.number(), e);
        }

        let flight = &report.flight;
        match config.output.format {
            OutputFormat::Cards => {
                println!(
                    "{} {} ({}): {} seats, {} available",
                    flight.number(),
                    flight.aircraft_model(),
                    flight.aircraft().registration(),
                    flight.aircraft().num_seats(),
                    flight.num_available_seats()
                );
                let mut printer = ConsoleCardPrinter::stdout();
                flight.make_boarding_cards(&mut printer);
                tracing::info!("Flight {}: printed {} boarding card(s)", flight.number(), printer.printed());
            }
            OutputFormat::Json => snapshots.push(flight.snapshot()),
        }
    }

    if config.output.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&snapshots).context("Failed to serialize seat maps")?;
        println!("{}", json);
    }

    Ok(())
}
