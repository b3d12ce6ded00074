pub use self::printer_profile::{PrinterProfile, PrinterConnectionData, PrinterProfileBuilder};
pub use self::printer_model::PrinterModel;

mod printer_profile;
mod printer_model;

use crate::{
    Error,
    RasterImage,
    command::{Command, TextFormat, RasterMode}
};

extern crate codepage_437;
extern crate log;

use log::{warn, debug};
use rusb::{UsbContext, Context, DeviceHandle, TransferType, Direction};
use codepage_437::{IntoCp437, CP437_CONTROL};
use std::cell::RefCell;

/// Keeps the actual living connection to the device
enum PrinterConnection {
    Usb {
        /// Bulk write endpoint
        endpoint: u8,
        /// Device handle
        dh: DeviceHandle<Context>,
        /// Time to wait before giving up writing to the bulk endpoint
        timeout: std::time::Duration
    },
    Terminal,
    /// Captures writes instead of sending them to a device
    Buffer(RefCell<Vec<Vec<u8>>>)
}

/// Pins a cash drawer can be wired to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerPin {
    Pin2,
    Pin5
}

/// Generic esc/pos printer driver
///
/// The printer represents the thermal printer connected to the computer.
/// ```rust,no_run
/// use zonerich_escpos::{Printer, PrinterModel};
///
/// let printer = match Printer::new(PrinterModel::AB88H.usb_profile()) {
///     Ok(maybe_printer) => match maybe_printer {
///         Some(printer) => printer,
///         None => panic!("No printer was found :(")
///     },
///     Err(e) => panic!("Error: {}", e)
/// };
/// // Now we have a printer
/// ```
///
/// It carries the default `set`, `hw` and `control` behavior shared by the esc/pos family.
/// Vendor-specific quirks live in wrappers like [ZonerichPrinter](crate::ZonerichPrinter),
/// which restrict or extend these defaults.
pub struct Printer {
    printer_profile: PrinterProfile,
    /// Actual connection to the printer
    printer_connection: PrinterConnection
}

impl Printer {
    /// Creates a new printer
    ///
    /// Creates the printer with the given profile. For usb profiles, the device list gets
    /// scanned for a matching vendor and product id, and `Ok(None)` is returned when no such
    /// device is connected.
    pub fn new(printer_profile: PrinterProfile) -> Result<Option<Printer>, Error> {
        match printer_profile.printer_connection_data {
            PrinterConnectionData::Usb{vendor_id, product_id, endpoint, timeout} => {
                match Printer::connect_usb(vendor_id, product_id, endpoint, timeout)? {
                    Some(printer_connection) => Ok(Some(Printer {
                        printer_profile,
                        printer_connection
                    })),
                    None => Ok(None)
                }
            },
            PrinterConnectionData::Terminal => Ok(Some(Printer {
                printer_profile,
                printer_connection: PrinterConnection::Terminal
            })),
            PrinterConnectionData::Buffer => Ok(Some(Printer {
                printer_profile,
                printer_connection: PrinterConnection::Buffer(RefCell::new(Vec::new()))
            }))
        }
    }

    /// Scans the usb bus for the requested device, and claims it
    fn connect_usb(vendor_id: u16, product_id: u16, endpoint: Option<u8>, timeout: std::time::Duration) -> Result<Option<PrinterConnection>, Error> {
        let context = Context::new().map_err(Error::RusbError)?;
        let devices = context.devices().map_err(Error::RusbError)?;
        for device in devices.iter() {
            let descriptor = device.device_descriptor().map_err(Error::RusbError)?;
            if descriptor.vendor_id() != vendor_id || descriptor.product_id() != product_id {
                continue;
            }
            // Before opening the device, we must know the bulk endpoint
            let endpoint = match endpoint {
                Some(endpoint) => endpoint,
                None => Printer::detect_bulk_endpoint(&device)?
            };
            let mut dh = device.open().map_err(Error::RusbError)?;
            if let Ok(active) = dh.kernel_driver_active(0) {
                if active {
                    // The kernel is holding the device, we have to detach it
                    dh.detach_kernel_driver(0).map_err(Error::RusbError)?;
                }
            } else {
                warn!("Could not find out if kernel driver is active, might encounter a problem soon.");
            }
            dh.claim_interface(0).map_err(Error::RusbError)?;
            return Ok(Some(PrinterConnection::Usb {
                endpoint,
                dh,
                timeout
            }));
        }
        // No printer was found with such vid and pid
        Ok(None)
    }

    /// Looks for an out-facing bulk endpoint in the device's active configuration
    fn detect_bulk_endpoint(device: &rusb::Device<Context>) -> Result<u8, Error> {
        let config_descriptor = device.active_config_descriptor().map_err(Error::RusbError)?;
        for interface in config_descriptor.interfaces() {
            for descriptor in interface.descriptors() {
                for endpoint in descriptor.endpoint_descriptors() {
                    if let (TransferType::Bulk, Direction::Out) = (endpoint.transfer_type(), endpoint.direction()) {
                        return Ok(endpoint.number());
                    }
                }
            }
        }
        Err(Error::NoBulkEndpoint)
    }

    /// Print some text.
    ///
    /// Text gets encoded to CP437 before transmission, except on terminal connections where
    /// it is displayed as-is.
    pub fn print<T: Into<String>>(&self, content: T) -> Result<(), Error> {
        let content = content.into();
        match &self.printer_connection {
            PrinterConnection::Terminal => {
                print!("{}", content);
                Ok(())
            },
            _other => {
                let feed = content.into_cp437(&CP437_CONTROL).map_err(|e| Error::CP437Error(e.into_string()))?;
                self.raw(&feed)
            }
        }
    }

    /// Print some text, with a newline at the end.
    pub fn println<T: Into<String>>(&self, content: T) -> Result<(), Error> {
        let feed = content.into() + "\n";
        self.print(feed)
    }

    /// Applies a full set of text formatting registers, batched in a single write.
    ///
    /// ```rust
    /// use zonerich_escpos::{Printer, PrinterProfile, command::TextFormat};
    /// let printer = Printer::new(PrinterProfile::buffer_builder().build()).unwrap().unwrap();
    /// printer.set(&TextFormat { bold: true, ..Default::default() })?;
    /// # Ok::<(), zonerich_escpos::Error>(())
    /// ```
    pub fn set(&self, format: &TextFormat) -> Result<(), Error> {
        self.raw(&format.as_bytes())
    }

    /// Performs a hardware action: "INIT", "SELECT" or "RESET", matched case-insensitively.
    ///
    /// Unrecognized actions are ignored without transmitting, matching the historical esc/pos
    /// driver behavior.
    pub fn hw(&self, action: &str) -> Result<(), Error> {
        let command = match action.to_uppercase().as_str() {
            "INIT" => Command::Init,
            "SELECT" => Command::Select,
            "RESET" => Command::Reset,
            _other => return Ok(())
        };
        self.raw(&command.as_bytes())
    }

    /// Sends a feed control sequence: "LF", "FF", "CR", "HT" or "VT", matched
    /// case-insensitively.
    ///
    /// Unrecognized codes are ignored without transmitting.
    pub fn control(&self, code: &str) -> Result<(), Error> {
        let command = match code.to_uppercase().as_str() {
            "LF" => Command::LineFeed,
            "FF" => Command::FormFeed,
            "CR" => Command::CarriageReturn,
            "HT" => Command::HorizontalTab,
            "VT" => Command::VerticalTab,
            _other => return Ok(())
        };
        self.raw(&command.as_bytes())
    }

    /// Cuts the paper completely
    pub fn cut(&self) -> Result<(), Error> {
        self.raw(&Command::FullCut.as_bytes())
    }

    /// Cuts the paper, leaving a small bridge to tear by hand
    pub fn partial_cut(&self) -> Result<(), Error> {
        self.raw(&Command::PartialCut.as_bytes())
    }

    /// Sends a pulse to the cash drawer connected on the given pin
    pub fn cash_drawer(&self, pin: DrawerPin) -> Result<(), Error> {
        let command = match pin {
            DrawerPin::Pin2 => Command::DrawerKick2,
            DrawerPin::Pin5 => Command::DrawerKick5
        };
        self.raw(&command.as_bytes())
    }

    /// Prints a raster image at the given size, scaled to the profile's dot width.
    pub fn image(&self, raster_image: &RasterImage, mode: RasterMode) -> Result<(), Error> {
        self.raw(&raster_image.to_raster(self.printer_profile.width, mode))
    }

    /// Sends raw information to the printer
    ///
    /// As simple as it sounds
    /// ```rust
    /// use zonerich_escpos::{Printer, PrinterProfile};
    /// let printer_profile = PrinterProfile::buffer_builder().build();
    /// let printer = Printer::new(printer_profile).unwrap().unwrap();
    /// printer.raw(&[0x01, 0x02])?;
    /// # Ok::<(), zonerich_escpos::Error>(())
    /// ```
    pub fn raw<A: AsRef<[u8]>>(&self, bytes: A) -> Result<(), Error> {
        match &self.printer_connection {
            PrinterConnection::Usb{endpoint, dh, timeout} => {
                dh.write_bulk(
                    *endpoint,
                    bytes.as_ref(),
                    *timeout
                ).map_err(Error::RusbError)?;
                Ok(())
            },
            PrinterConnection::Terminal => {
                debug!("raw write: {:02x?}", bytes.as_ref());
                Ok(())
            },
            PrinterConnection::Buffer(writes) => {
                writes.borrow_mut().push(bytes.as_ref().to_vec());
                Ok(())
            }
        }
    }

    /// Returns a copy of the writes captured so far
    ///
    /// Only available on buffer connections, `None` otherwise. Each element corresponds to
    /// one call to [raw](Printer::raw).
    pub fn captured(&self) -> Option<Vec<Vec<u8>>> {
        match &self.printer_connection {
            PrinterConnection::Buffer(writes) => Some(writes.borrow().clone()),
            _other => None
        }
    }
}
