use ambiguity_check::config::TelemetryConfig;
use ambiguity_check::{read_bulk_delimited, telemetry, BulkScore, Error, QUESTIONS};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use tracing::{info, warn};

/// Sammelauswertung: eine CSV-Zeile je Person (`respondent,item1,...,item12`)
#[derive(Parser)]
struct Args {
    path: String,
    /// Trennzeichen der Eingabedatei
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// Ausgabe als JSON-Zeilen
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    telemetry: TelemetryConfig,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    telemetry::init(&args.telemetry)?;
    let delimiter = u8::try_from(args.delimiter)
        .map_err(|_| Error::Unparsable(args.delimiter.to_string()))?;

    let reader = BufReader::new(File::open(&args.path)?);
    let (mut scored, mut failed) = (0usize, 0usize);
    for row in read_bulk_delimited(reader, delimiter) {
        match row {
            Ok((id, store)) => match BulkScore::evaluate(&QUESTIONS, id.clone(), &store) {
                Ok(score) => {
                    scored += 1;
                    match args.json {
                        true => println!("{}", serde_json::to_string(&score)?),
                        false => println!(
                            "id = {}, total = {}, category = {}",
                            score.respondent, score.total, score.category
                        ),
                    }
                }
                Err(e) => {
                    failed += 1;
                    warn!(respondent = %id, error = %e, "row not scored");
                    eprintln!("id = {}, {}", id, e);
                }
            },
            Err(e) => {
                failed += 1;
                eprintln!("{}", e);
            }
        }
    }
    info!(path = %args.path, scored, failed, "bulk scoring finished");
    Ok(())
}
