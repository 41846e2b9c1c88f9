use thiserror::Error;

/// All errors that the crate can generate. Underlying errors are passed
/// through untouched, so their messages reach the caller as-is.
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred while creating or writing the output
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [qrcode] couldn't encode the barcode payload
    Qr(#[from] qrcode::types::QrError),

    #[error("draw command references image {0}, which isn't on the canvas")]
    /// A draw command points at an image that was never added to the canvas
    MissingImage(usize),

    #[error("no graphics state was allocated for fill opacity {0}")]
    /// A translucent fill has no matching graphics state on the page
    MissingGraphicsState(f32),
}
