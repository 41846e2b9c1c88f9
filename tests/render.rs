use boarding_pass::{
    Airline, Airport, Boarding, DocumentRenderer, FlightRecord, PDFError, Passenger, RenderOptions,
};
use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};
use pretty_assertions::assert_eq;

fn sample_flight() -> FlightRecord {
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
        qr_code: false,
    }
}

/// Every string shown with `Tj`, in content stream order
fn shown_text(pdf: &LopdfDocument) -> Vec<String> {
    let pages = pdf.get_pages();
    assert_eq!(pages.len(), 1, "a boarding pass is a single page");
    let page_id = *pages.values().next().unwrap();
    let content = Content::decode(&pdf.get_page_content(page_id).unwrap()).unwrap();
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        })
        .collect()
}

/// Raw (still compressed) image XObject streams
fn image_streams(pdf: &LopdfDocument) -> Vec<&lopdf::Stream> {
    pdf.objects
        .values()
        .filter_map(|object| match object {
            Object::Stream(stream) => Some(stream),
            _ => None,
        })
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|subtype| subtype.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false)
        })
        .collect()
}

#[test]
fn sample_pass_renders_to_the_given_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("boarding-pass.pdf");

    let path = DocumentRenderer::new()
        .render(&sample_flight(), &output)
        .unwrap();

    assert_eq!(path, output);
    let size = std::fs::metadata(&path).unwrap().len();
    assert!(size > 0);
}

#[test]
fn pass_without_qr_has_no_images() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no-qr.pdf");
    DocumentRenderer::new()
        .render(&sample_flight(), &output)
        .unwrap();

    let pdf = LopdfDocument::load(&output).unwrap();
    assert!(image_streams(&pdf).is_empty());
}

/// Decode a greyscale QR bitmap with an independent reader, zoomed and padded
/// so the decoder gets several pixels per module.
fn decode_qr(pixels: &[u8], width: usize, height: usize) -> String {
    const ZOOM: usize = 8;
    const BORDER: usize = 16;
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        width * ZOOM + 2 * BORDER,
        height * ZOOM + 2 * BORDER,
        |x, y| {
            let x = x.wrapping_sub(BORDER) / ZOOM;
            let y = y.wrapping_sub(BORDER) / ZOOM;
            if x < width && y < height {
                pixels[y * width + x]
            } else {
                255
            }
        },
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "one QR code in the image");
    grids[0].decode().unwrap().1
}

/// The single embedded image, inflated and decoded as a QR code
fn embedded_qr_payload(bytes: &[u8]) -> String {
    let pdf = LopdfDocument::load_mem(bytes).unwrap();
    let images = image_streams(&pdf);
    assert_eq!(images.len(), 1);

    let image = images[0];
    assert_eq!(
        image.dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
        b"DeviceGray"
    );
    let width = image.dict.get(b"Width").unwrap().as_i64().unwrap() as usize;
    let height = image.dict.get(b"Height").unwrap().as_i64().unwrap() as usize;
    let pixels = miniz_oxide::inflate::decompress_to_vec_zlib(&image.content).unwrap();
    assert_eq!(pixels.len(), width * height);
    decode_qr(&pixels, width, height)
}

#[test]
fn pass_with_qr_embeds_the_barcode_once() {
    let mut flight = sample_flight();
    flight.qr_code = true;
    let bytes = DocumentRenderer::new().render_to_bytes(&flight).unwrap();

    assert_eq!(embedded_qr_payload(&bytes), flight.barcode);
}

#[test]
fn embedded_qr_follows_the_barcode_payload() {
    let long = "M1ALI/RAHMAN SV2501 012A JEDDEL ".repeat(18);
    for barcode in ["1", long.as_str()] {
        let mut flight = sample_flight();
        flight.qr_code = true;
        flight.barcode = barcode.to_string();
        let bytes = DocumentRenderer::new().render_to_bytes(&flight).unwrap();

        assert_eq!(embedded_qr_payload(&bytes), barcode);
    }
}

#[test]
fn details_are_printed_label_then_value() {
    let bytes = DocumentRenderer::new()
        .render_to_bytes(&sample_flight())
        .unwrap();
    let text = shown_text(&LopdfDocument::load_mem(&bytes).unwrap());

    let pairs = [
        ("DATE", "15 NOV 2024"),
        ("FLIGHT", "SV2501"),
        ("SEAT", "12A"),
        ("DEPARTS", "14:30"),
        ("GATE", "B12"),
        ("BOARDS", "13:45"),
    ];
    for (label, value) in pairs {
        let at = text
            .iter()
            .position(|t| t == label)
            .unwrap_or_else(|| panic!("{label} is printed"));
        assert_eq!(text[at + 1], value);
    }
    assert_eq!(text.first().map(String::as_str), Some("SAUDIA"));
    assert_eq!(
        text.last().map(String::as_str),
        Some("M1ALI/RAHMAN SV2501 012A JEDDEL")
    );
}

#[test]
fn passenger_name_is_printed_upper_case() {
    let mut flight = sample_flight();
    flight.passenger.name = "ali/rahman".into();
    let bytes = DocumentRenderer::new().render_to_bytes(&flight).unwrap();
    let text = shown_text(&LopdfDocument::load_mem(&bytes).unwrap());

    assert!(text.iter().any(|t| t == "ALI/RAHMAN"));
    assert!(!text.iter().any(|t| t == "ali/rahman"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pass.pdf");
    let mut flight = sample_flight();
    flight.qr_code = true;
    let renderer = DocumentRenderer::new();

    renderer.render(&flight, &output).unwrap();
    let first = std::fs::read(&output).unwrap();
    renderer.render(&flight, &output).unwrap();
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_output_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("does/not/exist/pass.pdf");

    let result = DocumentRenderer::new().render(&sample_flight(), &output);

    assert!(matches!(result, Err(PDFError::Io(_))));
    assert!(!output.exists());
}

#[test]
fn oversized_qr_payload_fails_the_render() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pass.pdf");
    let mut flight = sample_flight();
    flight.qr_code = true;
    flight.barcode = "M1".repeat(4000);

    let result = DocumentRenderer::with_options(RenderOptions::default()).render(&flight, &output);

    assert!(matches!(result, Err(PDFError::Qr(_))));
}

#[test]
fn renders_from_json() {
    let json = serde_json::json!({
        "airline": { "name": "SAUDIA", "code": "SV" },
        "flightNumber": "2501",
        "departure": { "code": "JED", "city": "JEDDAH", "date": "15 NOV 2024", "time": "14:30" },
        "arrival": { "code": "DEL", "city": "DELHI", "date": "15 NOV 2024", "time": "18:45" },
        "passenger": { "name": "ALI/RAHMAN", "seat": "12A" },
        "boarding": { "gate": "B12", "time": "13:45" },
        "barcode": "M1ALI/RAHMAN SV2501 012A JEDDEL",
        "qrCode": true
    });
    let flight: FlightRecord = serde_json::from_value(json).unwrap();
    assert_eq!(
        flight,
        FlightRecord {
            qr_code: true,
            ..sample_flight()
        }
    );

    let bytes = DocumentRenderer::new().render_to_bytes(&flight).unwrap();
    let pdf = LopdfDocument::load_mem(&bytes).unwrap();
    assert_eq!(image_streams(&pdf).len(), 1);
}
