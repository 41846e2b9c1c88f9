//! Renders a boarding pass.
//!
//! Usage: `cargo run --example boarding-pass -- [flight.json] [--output pass.pdf]`
//!
//! Without arguments, the sample SV2501 Jeddah to Delhi pass is written to
//! `./boarding-pass.pdf`. Set `RUST_LOG=debug` to see what the renderer does.

use boarding_pass::{Airline, Airport, Boarding, DocumentRenderer, FlightRecord, Passenger};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Render a boarding pass to PDF")]
struct Args {
    /// Flight record as JSON; the sample SV2501 flight when omitted
    flight: Option<PathBuf>,

    /// Where to write the PDF
    #[arg(short, long, default_value = "./boarding-pass.pdf")]
    output: PathBuf,
}

fn sample_flight() -> FlightRecord {
    FlightRecord {
        airline: Airline {
            name: "SAUDIA".to_string(),
            code: "SV".to_string(),
        },
        flight_number: "2501".to_string(),
        departure: Airport {
            code: "JED".to_string(),
            city: "JEDDAH".to_string(),
            date: "15 NOV 2024".to_string(),
            time: "14:30".to_string(),
        },
        arrival: Airport {
            code: "DEL".to_string(),
            city: "DELHI".to_string(),
            date: "15 NOV 2024".to_string(),
            time: "18:45".to_string(),
        },
        passenger: Passenger {
            name: "ALI/RAHMAN".to_string(),
            seat: "12A".to_string(),
        },
        boarding: Boarding {
            gate: "B12".to_string(),
            time: "13:45".to_string(),
        },
        barcode: "M1ALI/RAHMAN SV2501 012A JEDDEL".to_string(),
        qr_code: false,
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let flight = match &args.flight {
        Some(path) => {
            let json = std::fs::read_to_string(path).expect("can read flight record");
            serde_json::from_str(&json).expect("flight record is valid JSON")
        }
        None => sample_flight(),
    };

    match DocumentRenderer::new().render(&flight, &args.output) {
        Ok(path) => println!("PDF generated: {}", path.display()),
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}
