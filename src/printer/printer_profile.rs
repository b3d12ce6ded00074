use crate::Error;

/// Available connections with the printer
///
/// Determines the kind of connection that will be sustained with the printer. Try not to use
/// this enum directly, use the builder pattern instead (through the
/// [usb_builder](PrinterProfile::usb_builder), [terminal_builder](PrinterProfile::terminal_builder)
/// or [buffer_builder](PrinterProfile::buffer_builder) methods).
#[derive(Clone, Debug)]
pub enum PrinterConnectionData {
    /// Usb connection
    Usb {
        /// Vendor id for the printer
        vendor_id: u16,
        /// product id for the printer
        product_id: u16,
        /// Endpoint where the usb data is meant to be written to
        endpoint: Option<u8>,
        /// Timeout for bulk write operations
        timeout: std::time::Duration
    },
    /// Terminal printer, used for really simple previews.
    Terminal,
    /// In-memory sink that records every write, useful for tests and dry runs.
    Buffer
}

/// Details required to connect and print
///
/// The strict minimum information needed to print over usb are the vendor id and the product
/// id. Both should be found in the maker's website, or through `lsusb` on linux. The dot width
/// is only used for raster image printing.
#[derive(Clone, Debug)]
pub struct PrinterProfile {
    /// Connection to be established with the printer
    pub (crate) printer_connection_data: PrinterConnectionData,
    /// Total printer width in dots, for image printing
    pub (crate) width: u16
}

impl PrinterProfile {
    /// Create custom printing details
    ///
    /// Not recommended to use directly, see one of the builders instead.
    pub fn new(printer_connection_data: PrinterConnectionData, width: u16) -> PrinterProfile {
        PrinterProfile {
            printer_connection_data,
            width
        }
    }

    /// Creates a [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for usb printing.
    ///
    /// ```rust
    /// use zonerich_escpos::PrinterProfile;
    /// // Creates a minimum data structure to connect to a printer
    /// let printer_profile = PrinterProfile::usb_builder(0x0416, 0x5011).build();
    /// ```
    pub fn usb_builder(vendor_id: u16, product_id: u16) -> PrinterProfileBuilder {
        PrinterProfileBuilder::new_usb(vendor_id, product_id)
    }

    /// Creates a [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for terminal printing
    ///
    /// ```rust
    /// use zonerich_escpos::PrinterProfile;
    /// let printer_profile = PrinterProfile::terminal_builder().build();
    /// ```
    pub fn terminal_builder() -> PrinterProfileBuilder {
        PrinterProfileBuilder::new_terminal()
    }

    /// Creates a [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for buffered printing
    ///
    /// All writes get captured in memory instead of reaching a device, and can be inspected
    /// through [captured](crate::Printer::captured).
    /// ```rust
    /// use zonerich_escpos::PrinterProfile;
    /// let printer_profile = PrinterProfile::buffer_builder().build();
    /// ```
    pub fn buffer_builder() -> PrinterProfileBuilder {
        PrinterProfileBuilder::new_buffer()
    }
}

/// Helper structure to create a [PrinterProfile](crate::PrinterProfile)
///
/// Builder pattern for the [PrinterProfile](crate::PrinterProfile) structure.
pub struct PrinterProfileBuilder {
    /// The connection to the printer
    printer_connection_data: PrinterConnectionData,
    /// Width, in dots, of the printer
    width: u16
}

impl PrinterProfileBuilder {
    /// Creates a new [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for usb printing
    ///
    /// The data structure will be properly built just with the vendor id and the product id.
    /// The [Printer](crate::Printer)'s [new](crate::Printer::new) method will try to locate a
    /// bulk write endpoint, but it might fail to do so. See
    /// [with_endpoint](PrinterProfileBuilder::with_endpoint) for manual setup.
    ///
    /// By default, a width of 384 dots will be loaded with the profile.
    pub fn new_usb(vendor_id: u16, product_id: u16) -> PrinterProfileBuilder {
        PrinterProfileBuilder {
            printer_connection_data: PrinterConnectionData::Usb {
                vendor_id,
                product_id,
                endpoint: None,
                timeout: std::time::Duration::from_secs(2)
            },
            width: 384
        }
    }

    /// Creates a new [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for terminal printing
    pub fn new_terminal() -> PrinterProfileBuilder {
        PrinterProfileBuilder {
            printer_connection_data: PrinterConnectionData::Terminal,
            width: 384
        }
    }

    /// Creates a new [PrinterProfileBuilder](crate::PrinterProfileBuilder) set for buffered printing
    pub fn new_buffer() -> PrinterProfileBuilder {
        PrinterProfileBuilder {
            printer_connection_data: PrinterConnectionData::Buffer,
            width: 384
        }
    }

    /// Sets the usb endpoint to which the data will be written.
    ///
    /// ```rust
    /// use zonerich_escpos::PrinterProfileBuilder;
    /// // Creates the printer details with the endpoint 0x02
    /// let printer_profile = PrinterProfileBuilder::new_usb(0x0416, 0x5011)
    ///     .with_endpoint(0x02).unwrap()
    ///     .build();
    /// ```
    pub fn with_endpoint(mut self, endpoint: u8) -> Result<PrinterProfileBuilder, Error> {
        match &mut self.printer_connection_data {
            PrinterConnectionData::Usb{endpoint: self_endpoint, ..} => {
                *self_endpoint = Some(endpoint);
                Ok(self)
            },
            _other => Err(Error::UnsupportedForPrinterConnection)
        }
    }

    /// Adds a specific pixel width for the printer (required for printing images)
    ///
    /// Defaults to 384, usually for 58mm printers. 80mm models are usually 576 dots wide.
    /// ```rust
    /// use zonerich_escpos::PrinterProfileBuilder;
    /// let printer_profile = PrinterProfileBuilder::new_usb(0x0416, 0x5011)
    ///     .with_width(576)
    ///     .build();
    /// ```
    pub fn with_width(mut self, width: u16) -> PrinterProfileBuilder {
        self.width = width;
        self
    }

    /// Adds a bulk write timeout (usb only)
    ///
    /// USB devices might fail to write to the bulk endpoint. In such a case, a timeout must be
    /// provided to know when to stop waiting for the buffer to flush to the printer. The
    /// default value is 2 seconds.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Result<PrinterProfileBuilder, Error> {
        match &mut self.printer_connection_data {
            PrinterConnectionData::Usb{timeout: self_timeout, ..} => {
                *self_timeout = timeout;
                Ok(self)
            },
            _other => Err(Error::UnsupportedForPrinterConnection)
        }
    }

    /// Build the `PrinterProfile` that lies beneath the builder
    ///
    /// ```rust
    /// # use zonerich_escpos::PrinterProfileBuilder;
    /// let printer_profile = PrinterProfileBuilder::new_buffer().build();
    /// ```
    pub fn build(self) -> PrinterProfile {
        PrinterProfile {
            printer_connection_data: self.printer_connection_data,
            width: self.width
        }
    }
}
