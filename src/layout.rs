//! The boarding pass layout.
//!
//! Every element sits at a fixed position on an 85 × 54 mm card; nothing
//! reflows or resizes with the data. Positions and font sizes are in
//! millimetres, measured from the card's top-left corner.

use crate::canvas::{Canvas, TextAlign};
use crate::colour::{colours, Colour};
use crate::flight::FlightRecord;
use crate::font::StandardFont;
use crate::rect::Rect;
use crate::units::Mm;

/// Card width
pub const CARD_WIDTH: Mm = Mm(85.0);
/// Card height
pub const CARD_HEIGHT: Mm = Mm(54.0);
/// Horizontal center line that centered text is anchored on
pub const CENTER_X: Mm = Mm(42.5);

/// Where the QR code goes when the record asks for one
pub const QR_POSITION: Rect = Rect {
    x: Mm(27.0),
    y: Mm(15.0),
    width: Mm(30.0),
    height: Mm(30.0),
};

const DEPARTURE_X: Mm = Mm(15.0);
const ARRIVAL_X: Mm = Mm(60.0);

const DETAIL_ROW_1: Mm = Mm(41.0);
const DETAIL_ROW_2: Mm = Mm(45.0);
const DETAIL_VALUE_OFFSET: Mm = Mm(4.0);
const DETAIL_COLUMNS: [Mm; 3] = [Mm(5.0), Mm(30.0), Mm(55.0)];

/// Colours used to draw the pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Colour,
    pub header: Colour,
    /// Colour of all text printed on the background and header
    pub text: Colour,
    pub panel: Colour,
    /// Fill opacity of the passenger panel
    pub panel_opacity: f32,
    pub barcode_band: Colour,
    pub barcode_text: Colour,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Colour::new_rgb_bytes(0x00, 0x5a, 0x9e),
            header: Colour::new_rgb_bytes(0x2c, 0x3e, 0x50),
            text: colours::WHITE,
            panel: colours::WHITE,
            panel_opacity: 0.1,
            barcode_band: colours::WHITE,
            barcode_text: colours::BLACK,
        }
    }
}

/// One labelled value in the details grid
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    pub x: Mm,
    /// Top of the label; the value sits [DETAIL_VALUE_OFFSET] below it
    pub y: Mm,
}

/// The details grid: two rows of three columns, read left to right, top to bottom
pub fn detail_fields(flight: &FlightRecord) -> [DetailField; 6] {
    let [left, middle, right] = DETAIL_COLUMNS;
    let field = |label, value: &str, x, y| DetailField {
        label,
        value: value.to_string(),
        x,
        y,
    };
    [
        field("DATE", &flight.departure.date, left, DETAIL_ROW_1),
        field("FLIGHT", &flight.flight_code(), middle, DETAIL_ROW_1),
        field("SEAT", &flight.passenger.seat, right, DETAIL_ROW_1),
        field("DEPARTS", &flight.departure.time, left, DETAIL_ROW_2),
        field("GATE", &flight.boarding.gate, middle, DETAIL_ROW_2),
        field("BOARDS", &flight.boarding.time, right, DETAIL_ROW_2),
    ]
}

/// A right-pointing arrow, drawn as one closed outline centered on `(cx, cy)`
fn arrow(cx: Mm, cy: Mm) -> Vec<(Mm, Mm)> {
    const LENGTH: f32 = 6.0;
    const SHAFT: f32 = 0.3; // half thickness
    const HEAD_LENGTH: f32 = 2.0;
    const HEAD: f32 = 1.2; // half height
    let (x0, x1) = (cx - Mm(LENGTH / 2.0), cx + Mm(LENGTH / 2.0));
    let neck = x1 - Mm(HEAD_LENGTH);
    vec![
        (x0, cy - Mm(SHAFT)),
        (neck, cy - Mm(SHAFT)),
        (neck, cy - Mm(HEAD)),
        (x1, cy),
        (neck, cy + Mm(HEAD)),
        (neck, cy + Mm(SHAFT)),
        (x0, cy + Mm(SHAFT)),
    ]
}

/// Draw every fixed element of the pass onto a fresh card-sized canvas. The
/// optional QR code is left to the caller, since it's the only fallible step.
pub fn compose(flight: &FlightRecord, theme: &Theme) -> Canvas {
    use StandardFont::*;
    use TextAlign::*;

    let mut canvas = Canvas::new(CARD_WIDTH, CARD_HEIGHT);
    let ink = theme.text;

    // background and header band
    canvas
        .fill_rect(
            Rect::new(0.0, 0.0, *CARD_WIDTH, *CARD_HEIGHT),
            theme.background,
        )
        .fill_rect(Rect::new(0.0, 0.0, *CARD_WIDTH, 10.0), theme.header)
        .text(
            &flight.airline.name,
            HelveticaBold,
            Mm(8.0),
            ink,
            (CENTER_X, Mm(4.0)),
            Center,
        )
        .text(
            "BOARDING PASS",
            HelveticaBold,
            Mm(6.0),
            ink,
            (CENTER_X, Mm(7.0)),
            Center,
        );

    // airports
    canvas
        .text(
            &flight.departure.code,
            HelveticaBold,
            Mm(14.0),
            ink,
            (DEPARTURE_X, Mm(18.0)),
            Left,
        )
        .text(
            &flight.arrival.code,
            HelveticaBold,
            Mm(14.0),
            ink,
            (ARRIVAL_X, Mm(18.0)),
            Left,
        )
        .text(
            &flight.departure.city,
            Helvetica,
            Mm(6.0),
            ink,
            (DEPARTURE_X, Mm(22.0)),
            Left,
        )
        .text(
            &flight.arrival.city,
            Helvetica,
            Mm(6.0),
            ink,
            (ARRIVAL_X, Mm(22.0)),
            Left,
        )
        .text(
            "DEPARTURE",
            Helvetica,
            Mm(6.0),
            ink,
            (DEPARTURE_X, Mm(25.0)),
            Left,
        )
        .text(
            "ARRIVAL",
            Helvetica,
            Mm(6.0),
            ink,
            (ARRIVAL_X, Mm(25.0)),
            Left,
        );

    // direction and flight number between the airports
    canvas
        .fill_polygon(arrow(CENTER_X, Mm(23.0)), ink)
        .text(
            flight.flight_code(),
            Helvetica,
            Mm(6.0),
            ink,
            (CENTER_X, Mm(25.0)),
            Center,
        );

    // passenger panel
    canvas
        .fill_rounded_rect(
            Rect::new(5.0, 28.0, 75.0, 8.0),
            Mm(1.0),
            theme.panel,
            theme.panel_opacity,
        )
        .text(
            "PASSENGER",
            Helvetica,
            Mm(5.0),
            ink,
            (Mm(8.0), Mm(31.0)),
            Left,
        )
        .text(
            flight.passenger.name.to_uppercase(),
            HelveticaBold,
            Mm(8.0),
            ink,
            (Mm(8.0), Mm(35.0)),
            Left,
        );

    for detail in detail_fields(flight) {
        canvas
            .text(
                detail.label,
                Helvetica,
                Mm(5.0),
                ink,
                (detail.x, detail.y),
                Left,
            )
            .text(
                detail.value,
                HelveticaBold,
                Mm(7.0),
                ink,
                (detail.x, detail.y + DETAIL_VALUE_OFFSET),
                Left,
            );
    }

    // barcode band
    canvas
        .fill_rect(Rect::new(0.0, 49.0, *CARD_WIDTH, 5.0), theme.barcode_band)
        .text(
            &flight.barcode,
            Courier,
            Mm(4.0),
            theme.barcode_text,
            (CENTER_X, Mm(51.0)),
            Center,
        );

    canvas
}
