//! Renders airline boarding passes to single-page PDFs.
//!
//! ```no_run
//! use boarding_pass::{DocumentRenderer, FlightRecord};
//!
//! let json = std::fs::read_to_string("flight.json").expect("can read flight");
//! let flight: FlightRecord = serde_json::from_str(&json).expect("valid flight record");
//!
//! let path = DocumentRenderer::new()
//!     .render(&flight, "./boarding-pass.pdf")
//!     .expect("can render boarding pass");
//! println!("PDF generated: {}", path.display());
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

pub(crate) mod content;

mod document;
pub use document::*;

mod flight;
pub use flight::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// The fixed boarding pass layout and its theme
pub mod layout;

/// QR bitmap generation for the barcode payload
pub mod qr;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod renderer;
pub use renderer::*;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
