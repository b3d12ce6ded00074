extern crate serde;

use super::Command;
use crate::Error;
use serde::{Serialize, Deserialize};

/// Barcode symbologies supported by the printer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum BarcodeSystem {
    Ean13,
    Ean8,
    Code39,
    Code128
}

impl Eq for BarcodeSystem{}

impl BarcodeSystem {
    /// Parses a symbology name, matching case-insensitively.
    ///
    /// ```rust
    /// use zonerich_escpos::command::BarcodeSystem;
    /// assert_eq!(BarcodeSystem::parse("ean13").unwrap(), BarcodeSystem::Ean13);
    /// assert!(BarcodeSystem::parse("QRCODE").is_err());
    /// ```
    pub fn parse(system: &str) -> Result<BarcodeSystem, Error> {
        match system.to_uppercase().as_str() {
            "EAN13" => Ok(BarcodeSystem::Ean13),
            "EAN8" => Ok(BarcodeSystem::Ean8),
            "CODE39" => Ok(BarcodeSystem::Code39),
            "CODE128" => Ok(BarcodeSystem::Code128),
            _other => Err(Error::BarcodeType(system.to_string()))
        }
    }

    /// Byte representation of the print-barcode command for this symbology.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            BarcodeSystem::Ean13 => Command::BarcodeEan13.as_bytes(),
            BarcodeSystem::Ean8 => Command::BarcodeEan8.as_bytes(),
            BarcodeSystem::Code39 => Command::BarcodeCode39.as_bytes(),
            BarcodeSystem::Code128 => Command::BarcodeCode128.as_bytes()
        }
    }

    /// Inclusive bounds on the code length the firmware accepts for this symbology.
    pub fn code_length_bounds(&self) -> (usize, usize) {
        match self {
            BarcodeSystem::Ean13 => (12, 13),
            BarcodeSystem::Ean8 => (7, 8),
            BarcodeSystem::Code39 => (1, 255),
            BarcodeSystem::Code128 => (2, 255)
        }
    }
}

/// Optional module size for barcode printing
///
/// Both fields default to `None`, which leaves the printer's current barcode width and height
/// untouched.
/// ```rust
/// use zonerich_escpos::command::BarcodeOptions;
/// let options = BarcodeOptions { width: Some(3), ..Default::default() };
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct BarcodeOptions {
    /// Module width, valid range [2-6]
    pub width: Option<u8>,
    /// Bar height in dots, valid range [1-255]
    pub height: Option<u8>
}
