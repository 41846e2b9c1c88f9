use crate::{
    document::Document,
    flight::FlightRecord,
    image::Image,
    info::Info,
    layout::{self, Theme},
    qr::{self, QrOptions},
    PDFError,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Everything about a render that isn't the flight itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub qr: QrOptions,
    /// Metadata for the PDF info block. When [None], the title, subject and
    /// author are derived from the flight.
    pub info: Option<Info>,
}

/// Renders boarding passes. The renderer only holds options, so one instance
/// can render any number of passes, from any number of threads; every render
/// builds its own canvas.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    options: RenderOptions,
}

impl DocumentRenderer {
    pub fn new() -> DocumentRenderer {
        DocumentRenderer::default()
    }

    pub fn with_options(options: RenderOptions) -> DocumentRenderer {
        DocumentRenderer { options }
    }

    /// Build the boarding pass for `flight` in memory, QR code included if the
    /// flight asks for one.
    pub fn compose(&self, flight: &FlightRecord) -> Result<Document, PDFError> {
        let mut canvas = layout::compose(flight, &self.options.theme);

        if flight.qr_code {
            let bitmap = qr::encode(&flight.barcode, &self.options.qr)?;
            log::debug!(
                "placing {}x{} QR bitmap for {}",
                bitmap.width(),
                bitmap.height(),
                flight.flight_code()
            );
            canvas.image(Image::new_bitmap(bitmap), layout::QR_POSITION);
        }

        let mut document = Document::new(canvas);
        document.set_info(
            self.options
                .info
                .clone()
                .unwrap_or_else(|| default_info(flight)),
        );
        Ok(document)
    }

    /// Render the boarding pass into any writer
    pub fn render_to_writer<W: Write>(
        &self,
        flight: &FlightRecord,
        writer: W,
    ) -> Result<(), PDFError> {
        self.compose(flight)?.write(writer)
    }

    /// Render the boarding pass to an in-memory PDF
    pub fn render_to_bytes(&self, flight: &FlightRecord) -> Result<Vec<u8>, PDFError> {
        let mut bytes = Vec::new();
        self.render_to_writer(flight, &mut bytes)?;
        Ok(bytes)
    }

    /// Render the boarding pass to `output_path`, creating or truncating the file,
    /// and return the path on success.
    ///
    /// The file is opened before anything is drawn, so an unwritable path fails
    /// straight away. Errors are returned as-is; nothing is retried, and a
    /// partially written file is left in place.
    pub fn render<P: AsRef<Path>>(
        &self,
        flight: &FlightRecord,
        output_path: P,
    ) -> Result<PathBuf, PDFError> {
        let output_path = output_path.as_ref();
        log::debug!(
            "rendering boarding pass {} for {} to {}",
            flight.flight_code(),
            flight.passenger.name,
            output_path.display()
        );

        let file = File::create(output_path)?;
        self.render_to_writer(flight, BufWriter::new(file))?;

        log::debug!("wrote {}", output_path.display());
        Ok(output_path.to_path_buf())
    }
}

fn default_info(flight: &FlightRecord) -> Info {
    Info::new()
        .title(format!("Boarding Pass {}", flight.flight_code()))
        .subject(format!("{}-{}", flight.departure.code, flight.arrival.code))
        .author(flight.passenger.name.to_uppercase())
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawCommand;
    use crate::flight::{Airline, Airport, Boarding, Passenger};

    fn record(qr_code: bool) -> FlightRecord {
        FlightRecord {
            airline: Airline {
                name: "SAUDIA".into(),
                code: "SV".into(),
            },
            flight_number: "2501".into(),
            departure: Airport {
                code: "JED".into(),
                city: "JEDDAH".into(),
                date: "15 NOV 2024".into(),
                time: "14:30".into(),
            },
            arrival: Airport {
                code: "DEL".into(),
                city: "DELHI".into(),
                date: "15 NOV 2024".into(),
                time: "18:45".into(),
            },
            passenger: Passenger {
                name: "ALI/RAHMAN".into(),
                seat: "12A".into(),
            },
            boarding: Boarding {
                gate: "B12".into(),
                time: "13:45".into(),
            },
            barcode: "M1ALI/RAHMAN SV2501 012A JEDDEL".into(),
            qr_code,
        }
    }

    #[test]
    fn qr_image_is_the_last_command() {
        let document = DocumentRenderer::new().compose(&record(true)).unwrap();
        assert_eq!(document.canvas.images.len(), 1);
        match document.canvas.commands.last() {
            Some(DrawCommand::Image { position, .. }) => assert_eq!(*position, layout::QR_POSITION),
            other => panic!("expected the QR image last, got {other:?}"),
        }
    }

    #[test]
    fn no_qr_without_the_flag() {
        let document = DocumentRenderer::new().compose(&record(false)).unwrap();
        assert_eq!(document.canvas.images.len(), 0);
    }

    #[test]
    fn qr_failure_is_returned() {
        let mut flight = record(true);
        flight.barcode = "0".repeat(9000);
        let result = DocumentRenderer::new().compose(&flight);
        assert!(matches!(result, Err(PDFError::Qr(_))));
    }

    #[test]
    fn info_defaults_to_the_flight() {
        let document = DocumentRenderer::new().compose(&record(false)).unwrap();
        let info = document.info.unwrap();
        assert_eq!(info.title.as_deref(), Some("Boarding Pass SV2501"));
        assert_eq!(info.subject.as_deref(), Some("JED-DEL"));
        assert_eq!(info.author.as_deref(), Some("ALI/RAHMAN"));
    }

    #[test]
    fn explicit_info_wins() {
        let options = RenderOptions {
            info: Some(Info::new().title("Custom").clone()),
            ..Default::default()
        };
        let document = DocumentRenderer::with_options(options)
            .compose(&record(false))
            .unwrap();
        assert_eq!(document.info.unwrap().title.as_deref(), Some("Custom"));
    }

    #[test]
    fn renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentRenderer>();
    }
}
