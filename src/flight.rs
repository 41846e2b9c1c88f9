use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    pub name: String,
    /// Two-letter carrier code, e.g. `SV`
    pub code: String,
}

/// One end of the flight segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// Three-letter airport code, e.g. `JED`
    pub code: String,
    pub city: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Name in `LAST/FIRST` form
    pub name: String,
    /// Row number and seat letter, e.g. `12A`
    pub seat: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boarding {
    pub gate: String,
    pub time: String,
}

/// Everything printed on one boarding pass. Fields are printed as given; the
/// caller is responsible for validating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub airline: Airline,
    pub flight_number: String,
    pub departure: Airport,
    pub arrival: Airport,
    pub passenger: Passenger,
    pub boarding: Boarding,
    /// Raw barcode payload, printed in monospace and optionally QR-encoded
    pub barcode: String,
    /// Whether to also draw the barcode payload as a QR code
    #[serde(default)]
    pub qr_code: bool,
}

impl FlightRecord {
    /// Carrier code and flight number, e.g. `SV2501`
    pub fn flight_code(&self) -> String {
        format!("{}{}", self.airline.code, self.flight_number)
    }
}
