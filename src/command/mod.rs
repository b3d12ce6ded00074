pub use self::command::Command;
pub use self::barcode::{BarcodeSystem, BarcodeOptions};
pub use self::style::{Font, Justification, UnderlineMode, TextFormat};
pub use self::raster_mode::RasterMode;

mod command;
mod barcode;
mod style;
mod raster_mode;
