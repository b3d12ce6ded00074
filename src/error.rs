/// Errors that this crate throws.
#[derive(Debug)]
pub enum Error {
    /// Error related to rusb
    RusbError(rusb::Error),
    /// For text printing, the content could not be encoded
    CP437Error(String),
    /// Error regarding image treatment
    ImageError(image::ImageError),
    /// This means no bulk endpoint could be found
    NoBulkEndpoint,
    /// Indicates that a builder method was called on the wrong printer connection
    UnsupportedForPrinterConnection,
    /// Barcode width or height outside of the range the firmware accepts
    BarcodeSize(String),
    /// Unknown barcode symbology
    BarcodeType(String),
    /// Missing barcode code, or code length outside of the symbology's range
    BarcodeCode(String),
    /// Malformed or out-of-range page parameter
    InvalidValue(String),
    /// The requested action is not supported by this printer
    Unsupported(String)
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let content = match self {
            Error::RusbError(e) => format!("rusb error: {}", e),
            Error::CP437Error(detail) => format!("CP437 error: {}", detail),
            Error::ImageError(e) => format!("Image error: {}", e),
            Error::NoBulkEndpoint => "No bulk endpoint could be found".to_string(),
            Error::UnsupportedForPrinterConnection => "The called method does not work with the current printer connection".to_string(),
            Error::BarcodeSize(detail) => format!("Barcode size out of range: {}", detail),
            Error::BarcodeType(system) => format!("Unknown barcode symbology \"{}\"", system),
            Error::BarcodeCode(detail) => format!("Invalid barcode code: {}", detail),
            Error::InvalidValue(detail) => format!("Invalid value: {}", detail),
            Error::Unsupported(detail) => format!("Not supported by this printer: {}", detail)
        };
        write!(formatter, "{}", content)
    }
}

impl std::error::Error for Error{}
