use clap::Parser;
use geocoord_rs::{ConversionReport, CsvConvertConfig, GeoCoordError, csv_to_converted_csv};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Convert coordinate text between lat/lon, UTM and MGRS
#[derive(Parser, Debug)]
#[command(name = "geocoord")]
#[command(about = "Convert coordinate text between lat/lon, UTM and MGRS")]
struct Args {
    /// Coordinate text, one position per argument
    texts: Vec<String>,

    /// Batch convert a CSV file
    #[arg(long, num_args = 3, value_names = ["INPUT", "OUTPUT", "COLUMN"])]
    csv: Option<Vec<String>>,

    /// MGRS digits per axis (1-5)
    #[arg(short, long, default_value_t = 5)]
    precision: u8,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), GeoCoordError> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some([input, output, column]) = args.csv.as_deref() {
        let config = CsvConvertConfig::new(column.as_str()).precision(args.precision);
        csv_to_converted_csv(input, output, &config)?;
        info!(input = %input, output = %output, "CSV conversion finished");
    }

    for text in &args.texts {
        match ConversionReport::from_text(text, args.precision) {
            Ok(report) => println!("{}", report.to_json()?),
            Err(e @ GeoCoordError::UnrecognizedInput(_)) => eprintln!("{}", e),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
