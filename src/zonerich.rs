use crate::{
    Error,
    Printer,
    PrinterProfile,
    RasterImage,
    printer::DrawerPin,
    command::{Command, BarcodeSystem, BarcodeOptions, TextFormat, RasterMode}
};

/// Zonerich vendor profile
///
/// Wraps the generic [Printer](crate::Printer) and layers the quirks of Zonerich firmware on
/// top of it: barcode framing with an explicit length byte, page margin commands, and a pair
/// of hardware and control codes the devices do not support. Methods without a quirk forward
/// to the generic driver unchanged.
///
/// ```rust,no_run
/// use zonerich_escpos::{ZonerichPrinter, PrinterModel, command::BarcodeOptions};
///
/// let printer = match ZonerichPrinter::new(PrinterModel::AB88H.usb_profile()) {
///     Ok(maybe_printer) => match maybe_printer {
///         Some(printer) => printer,
///         None => panic!("No printer was found :(")
///     },
///     Err(e) => panic!("Error: {}", e)
/// };
/// printer.barcode("4006381333931", "EAN13", BarcodeOptions::default()).unwrap();
/// printer.cut().unwrap();
/// ```
pub struct ZonerichPrinter {
    printer: Printer
}

impl From<Printer> for ZonerichPrinter {
    fn from(printer: Printer) -> ZonerichPrinter {
        ZonerichPrinter {
            printer
        }
    }
}

impl ZonerichPrinter {
    /// Creates a new Zonerich printer, with the same connection semantics as
    /// [Printer::new](crate::Printer::new).
    pub fn new(printer_profile: PrinterProfile) -> Result<Option<ZonerichPrinter>, Error> {
        Ok(Printer::new(printer_profile)?.map(ZonerichPrinter::from))
    }

    /// Prints a barcode.
    ///
    /// The symbology is matched case-insensitively against EAN13, EAN8, CODE39 and CODE128.
    /// The code must be non-empty and its length must lie within the symbology's bounds
    /// (EAN13 12-13, EAN8 7-8, CODE39 1-255, CODE128 2-255). The whole sequence, including
    /// the optional width and height settings, gets transmitted as a single write, and
    /// nothing is transmitted when validation fails.
    pub fn barcode(&self, code: &str, system: &str, options: BarcodeOptions) -> Result<(), Error> {
        // The firmware misplaces barcodes unless left justification is active, so it gets
        // forced here regardless of the current alignment
        let mut feed = Command::AlignLeft.as_bytes();
        if let Some(width) = options.width {
            if width < 2 || width > 6 {
                return Err(Error::BarcodeSize(format!("width {} not in [2, 6]", width)));
            }
            feed.extend_from_slice(&Command::BarcodeWidth.as_bytes());
            feed.push(width);
        }
        if let Some(height) = options.height {
            if height < 1 {
                return Err(Error::BarcodeSize(format!("height {} not in [1, 255]", height)));
            }
            feed.extend_from_slice(&Command::BarcodeHeight.as_bytes());
            feed.push(height);
        }
        let system = BarcodeSystem::parse(system)?;
        feed.extend_from_slice(&system.as_bytes());
        if code.is_empty() {
            return Err(Error::BarcodeCode("no code given".to_string()));
        }
        let (min, max) = system.code_length_bounds();
        if code.len() < min || code.len() > max {
            return Err(Error::BarcodeCode(format!("length {} not in [{}, {}]", code.len(), min, max)));
        }
        // The firmware wants the code prefixed with its length
        feed.push(code.len() as u8);
        feed.extend_from_slice(code.as_bytes());
        self.printer.raw(&feed)
    }

    /// Sets up the page format.
    ///
    /// Each pair is `(nL, nH)`, interpreted by the device as `nL + nH * 256` dots. The left
    /// margin requires `nL >= 1`. Margin and width commands get batched in margin-then-width
    /// order and transmitted as a single write; with no arguments nothing is transmitted.
    pub fn page(&self, left_margin: Option<(u8, u8)>, print_width: Option<(u8, u8)>) -> Result<(), Error> {
        let mut feed = Vec::new();
        if let Some((n_l, n_h)) = left_margin {
            if n_l < 1 {
                return Err(Error::InvalidValue(format!("left margin nL {} not in [1, 255]", n_l)));
            }
            feed.extend_from_slice(&Command::LeftMargin.as_bytes());
            feed.push(n_l);
            feed.push(n_h);
        }
        if let Some((n_l, n_h)) = print_width {
            feed.extend_from_slice(&Command::PrintWidth.as_bytes());
            feed.push(n_l);
            feed.push(n_h);
        }
        if feed.is_empty() {
            return Ok(());
        }
        self.printer.raw(&feed)
    }

    /// Performs a hardware action.
    ///
    /// Zonerich devices do not implement printer select or hardware reset, so "SELECT" and
    /// "RESET" (case-insensitive) fail before anything is transmitted. Everything else is
    /// delegated to [Printer::hw](crate::Printer::hw).
    pub fn hw(&self, action: &str) -> Result<(), Error> {
        if action.is_empty() || matches!(action.to_uppercase().as_str(), "SELECT" | "RESET") {
            return Err(Error::Unsupported(format!("hardware action \"{}\"", action)));
        }
        self.printer.hw(action)
    }

    /// Sends a feed control sequence.
    ///
    /// Zonerich devices do not implement form feed or vertical tab, so "FF" and "VT"
    /// (case-insensitive) fail before anything is transmitted. Everything else is delegated
    /// to [Printer::control](crate::Printer::control).
    pub fn control(&self, code: &str) -> Result<(), Error> {
        if code.is_empty() || matches!(code.to_uppercase().as_str(), "FF" | "VT") {
            return Err(Error::Unsupported(format!("control code \"{}\"", code)));
        }
        self.printer.control(code)
    }

    /// Applies text formatting. Forwards unchanged to [Printer::set](crate::Printer::set).
    pub fn set(&self, format: &TextFormat) -> Result<(), Error> {
        self.printer.set(format)
    }

    /// Queries printer status.
    ///
    /// Status readback is not implemented for this hardware; the call always succeeds
    /// without transmitting anything.
    pub fn status(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Print some text. Forwards to [Printer::print](crate::Printer::print).
    pub fn print<T: Into<String>>(&self, content: T) -> Result<(), Error> {
        self.printer.print(content)
    }

    /// Print some text, with a newline at the end.
    pub fn println<T: Into<String>>(&self, content: T) -> Result<(), Error> {
        self.printer.println(content)
    }

    /// Cuts the paper completely
    pub fn cut(&self) -> Result<(), Error> {
        self.printer.cut()
    }

    /// Cuts the paper, leaving a small bridge to tear by hand
    pub fn partial_cut(&self) -> Result<(), Error> {
        self.printer.partial_cut()
    }

    /// Sends a pulse to the cash drawer connected on the given pin
    pub fn cash_drawer(&self, pin: DrawerPin) -> Result<(), Error> {
        self.printer.cash_drawer(pin)
    }

    /// Prints a raster image at the given size
    pub fn image(&self, raster_image: &RasterImage, mode: RasterMode) -> Result<(), Error> {
        self.printer.image(raster_image, mode)
    }

    /// Sends raw information to the printer
    pub fn raw<A: AsRef<[u8]>>(&self, bytes: A) -> Result<(), Error> {
        self.printer.raw(bytes)
    }

    /// Returns a copy of the writes captured so far, on buffer connections
    pub fn captured(&self) -> Option<Vec<Vec<u8>>> {
        self.printer.captured()
    }

    /// Access to the wrapped generic driver
    pub fn printer(&self) -> &Printer {
        &self.printer
    }
}
