//! Library for controlling Zonerich thermal printers with rust
//!
//! Zonerich devices speak a vendor dialect of esc/pos: most of the protocol is the common
//! escape-code set, with a handful of quirks around barcode framing, page margins, and a few
//! hardware and control codes the firmware does not implement. The [ZonerichPrinter] wrapper
//! carries those quirks, on top of the generic [Printer] driver.
//!
//! ```rust,no_run
//! use zonerich_escpos::{ZonerichPrinter, PrinterProfile};
//!
//! let printer_profile = PrinterProfile::usb_builder(0x0416, 0x5011).build();
//! let printer = match ZonerichPrinter::new(printer_profile) {
//!     Ok(maybe_printer) => match maybe_printer {
//!         Some(printer) => printer,
//!         None => panic!("No printer was found :(")
//!     },
//!     Err(e) => panic!("Error: {}", e)
//! };
//! // We print simple text
//! match printer.println("Hello, world!") {
//!     Ok(_) => (),
//!     Err(e) => println!("Error: {}", e)
//! }
//! ```
//!
//! ## Printer Details
//!
//! In order to print, some data about the printer must be known. The [PrinterProfile]
//! structure fulfills this purpose. The strict minimum information needed to print over usb
//! are the vendor id and the product id; for the models known to the library,
//! [PrinterModel] has them prefilled. If you are running linux, one way to get these values
//! is by executing the `lsusb` command.
//!
//! Besides usb, profiles can target the terminal (for quick previews), or an in-memory
//! buffer that records every write, which the test-suite uses to check the exact byte
//! sequences sent to the device.
//!
//! ## Barcodes
//!
//! The firmware supports EAN13, EAN8, CODE39 and CODE128, and wants the code prefixed with
//! a length byte. The [barcode](ZonerichPrinter::barcode) method validates the code against
//! the symbology's length bounds before anything gets transmitted:
//!
//! ```rust
//! use zonerich_escpos::{ZonerichPrinter, PrinterProfile, command::BarcodeOptions};
//!
//! let printer = ZonerichPrinter::new(PrinterProfile::buffer_builder().build())
//!     .unwrap().unwrap();
//! printer.barcode("4006381333931", "EAN13", BarcodeOptions {
//!     width: Some(3),
//!     height: Some(64)
//! })?;
//! # Ok::<(), zonerich_escpos::Error>(())
//! ```

pub use printer::{Printer, DrawerPin, PrinterProfile, PrinterProfileBuilder, PrinterModel, PrinterConnectionData};
pub use zonerich::ZonerichPrinter;
pub use raster::RasterImage;
pub use error::Error;

/// Contains raw esc/pos commands
pub mod command;

mod printer;
mod zonerich;
mod raster;
mod error;
