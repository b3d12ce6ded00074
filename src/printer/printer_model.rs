use super::{PrinterProfile};

/// Zonerich printers known to this library
///
/// Probably needs updates. If you know one that is not in the list, send it to the author
/// through email to be considered in future updates.
pub enum PrinterModel {
    /// 58mm desktop model
    AB58C,
    /// 80mm desktop model with cutter
    AB88H
}

impl PrinterModel {
    /// Get the vendor and product id of the current model
    pub fn vp_id(&self) -> (u16, u16) {
        match self {
            PrinterModel::AB58C => (0x0416, 0x5011),
            PrinterModel::AB88H => (0x0483, 0x5743)
        }
    }

    /// Obtain the usb profile of the printer, to make an easy print
    pub fn usb_profile(&self) -> PrinterProfile {
        let (vendor_id, product_id) = self.vp_id();
        match self {
            PrinterModel::AB58C => {
                PrinterProfile::usb_builder(vendor_id, product_id)
                    .with_width(384)
                    .build()
            },
            PrinterModel::AB88H => {
                PrinterProfile::usb_builder(vendor_id, product_id)
                    .with_width(576)
                    .build()
            }
        }
    }
}
