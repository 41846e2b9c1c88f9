//! Content stream rendering for a [Canvas].

use crate::canvas::{Canvas, DrawCommand, Shape, TextRun};
use crate::colour::Colour;
use crate::font::encode_win_ansi;
use crate::rect::Rect;
use crate::transform::Transform;
use crate::units::Mm;
use crate::PDFError;
use std::io::Write;

// bezier control point distance for a quarter circle, as a fraction of the radius
const KAPPA: f32 = 0.552_284_8;

/// Renders the canvas commands to a PDF content stream.
///
/// The whole stream runs under a millimetre-to-point transform, so every
/// coordinate written below is in millimetres; only the y axis is flipped here,
/// from the card's top-left origin to PDF's bottom-left one.
///
/// `opacities` lists the graphics states on the page; translucent fill `i`
/// selects `/GS{i}` for its opacity.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(canvas: &Canvas, opacities: &[f32]) -> Result<Vec<u8>, PDFError> {
    let mut content: Vec<u8> = Vec::default();
    if canvas.commands.is_empty() {
        return Ok(content);
    }

    write!(&mut content, "q\n")?;
    content.write_all(Transform::millimetres().to_operator().as_bytes())?;

    for command in canvas.commands.iter() {
        match command {
            DrawCommand::Fill {
                shape,
                colour,
                opacity,
            } => {
                write!(&mut content, "q\n")?;
                if *opacity < 1.0 {
                    let gs = opacities
                        .iter()
                        .position(|o| o == opacity)
                        .ok_or(PDFError::MissingGraphicsState(*opacity))?;
                    write!(&mut content, "/GS{gs} gs\n")?;
                }
                write_colour(&mut content, *colour)?;
                write_shape(&mut content, shape, canvas.height)?;
                write!(&mut content, "f\n")?;
                write!(&mut content, "Q\n")?;
            }
            DrawCommand::Text(run) => {
                write_text(&mut content, run, canvas.height)?;
            }
            DrawCommand::Image { image, position } => {
                if canvas.images.get(*image).is_none() {
                    return Err(PDFError::MissingImage(image.index()));
                }
                let flipped_y = canvas.height - position.bottom();
                let placement = Transform::scale(*position.width, *position.height)
                    .with_translate(position.x.0, flipped_y.0);
                write!(&mut content, "q\n")?;
                content.write_all(placement.to_operator().as_bytes())?;
                write!(&mut content, "/I{} Do\n", image.index())?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    write!(&mut content, "Q\n")?;
    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_shape(content: &mut Vec<u8>, shape: &Shape, height: Mm) -> Result<(), std::io::Error> {
    match shape {
        Shape::Rect(rect) => {
            write!(
                content,
                "{} {} {} {} re\n",
                rect.x.0,
                (height - rect.bottom()).0,
                rect.width.0,
                rect.height.0
            )
        }
        Shape::RoundedRect { rect, radius } => write_rounded_rect(content, rect, *radius, height),
        Shape::Polygon(points) => {
            for (i, (x, y)) in points.iter().enumerate() {
                let op = if i == 0 { "m" } else { "l" };
                write!(content, "{} {} {op}\n", x.0, (height - *y).0)?;
            }
            write!(content, "h\n")
        }
    }
}

/// Traces a rectangle with quarter-circle corners, anticlockwise from the
/// bottom edge, in PDF space
#[allow(clippy::write_with_newline)]
fn write_rounded_rect(
    content: &mut Vec<u8>,
    rect: &Rect,
    radius: Mm,
    height: Mm,
) -> Result<(), std::io::Error> {
    let limit = rect.width.0.min(rect.height.0) / 2.0;
    let r = radius.0.min(limit).max(0.0);
    let k = r * KAPPA;
    let x1 = rect.x.0;
    let x2 = rect.right().0;
    let y1 = (height - rect.bottom()).0;
    let y2 = (height - rect.y).0;

    write!(content, "{} {} m\n", x1 + r, y1)?;
    write!(content, "{} {} l\n", x2 - r, y1)?;
    write_curve(content, [x2 - r + k, y1, x2, y1 + r - k, x2, y1 + r])?;
    write!(content, "{} {} l\n", x2, y2 - r)?;
    write_curve(content, [x2, y2 - r + k, x2 - r + k, y2, x2 - r, y2])?;
    write!(content, "{} {} l\n", x1 + r, y2)?;
    write_curve(content, [x1 + r - k, y2, x1, y2 - r + k, x1, y2 - r])?;
    write!(content, "{} {} l\n", x1, y1 + r)?;
    write_curve(content, [x1, y1 + r - k, x1 + r - k, y1, x1 + r, y1])?;
    write!(content, "h\n")
}

fn write_curve(content: &mut Vec<u8>, points: [f32; 6]) -> Result<(), std::io::Error> {
    let [x1, y1, x2, y2, x3, y3] = points;
    writeln!(content, "{x1} {y1} {x2} {y2} {x3} {y3} c")
}

#[allow(clippy::write_with_newline)]
fn write_text(content: &mut Vec<u8>, run: &TextRun, height: Mm) -> Result<(), std::io::Error> {
    let (x, baseline) = run.baseline_origin();
    write!(content, "q\n")?;
    write_colour(content, run.colour)?;
    write!(content, "BT\n")?;
    write!(content, "/F{} {} Tf\n", run.font.index(), run.size.0)?;
    write!(content, "{} {} Td\n", x.0, (height - baseline).0)?;
    write!(content, "<")?;
    for byte in encode_win_ansi(&run.text) {
        write!(content, "{byte:02x}")?;
    }
    write!(content, "> Tj\n")?;
    write!(content, "ET\n")?;
    write!(content, "Q\n")
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}
