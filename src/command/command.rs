extern crate serde;

use serde::{Serialize, Deserialize};

/// Fixed escape sequences understood by Zonerich printers.
///
/// Each variant corresponds to one entry of the hardware command table. The byte values must
/// match the printer firmware exactly, so treat this as a wire-format table rather than as
/// tunable configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Command {
    /// Print buffer contents and feed one line
    LineFeed,
    /// Form feed
    FormFeed,
    /// Print buffer contents without feeding
    CarriageReturn,
    /// Move to the next horizontal tab position
    HorizontalTab,
    /// Vertical tab
    VerticalTab,
    /// Clear the data buffer and reset modes. Equivalent to ESC @
    Init,
    /// Printer select. Equivalent to ESC =
    Select,
    /// Reset printer hardware
    Reset,
    /// Pulse on cash drawer pin 2
    DrawerKick2,
    /// Pulse on cash drawer pin 5
    DrawerKick5,
    /// Full paper cut
    FullCut,
    /// Partial paper cut
    PartialCut,
    /// Normal text size. Equivalent to ESC ! 0
    TextNormal,
    /// Double height text
    TextDoubleHeight,
    /// Double width text
    TextDoubleWidth,
    UnderlineOff,
    /// Underline font 1-dot ON
    Underline1Dot,
    /// Underline font 2-dot ON
    Underline2Dot,
    BoldOn,
    BoldOff,
    /// Font type A
    FontA,
    /// Font type B
    FontB,
    /// Left justification
    AlignLeft,
    /// Centering
    AlignCenter,
    /// Right justification
    AlignRight,
    /// White-on-black printing ON
    InverseOn,
    InverseOff,
    /// Set left margin, takes nL nH [0-255] each
    LeftMargin,
    /// Set print width, takes nL nH [0-255] each
    PrintWidth,
    /// Set barcode height, takes n [1-255]
    BarcodeHeight,
    /// Set barcode width, takes n [2-6]
    BarcodeWidth,
    /// EAN8 barcode, takes length byte [7-8] plus code
    BarcodeEan8,
    /// EAN13 barcode, takes length byte [12-13] plus code
    BarcodeEan13,
    /// CODE39 barcode, takes length byte [1-255] plus code
    BarcodeCode39,
    /// CODE128 barcode, takes length byte [2-255] plus code
    BarcodeCode128,
    /// Raster image, normal size
    RasterNormal,
    /// Raster image, double width
    RasterDoubleWidth,
    /// Raster image, double height
    RasterDoubleHeight,
    /// Raster image, quadruple size
    RasterQuadruple
}

impl Command {
    /// Byte representation of the escape sequence.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Command::LineFeed => vec![0x0a],
            Command::FormFeed => vec![0x0c],
            Command::CarriageReturn => vec![0x0d],
            Command::HorizontalTab => vec![0x09],
            Command::VerticalTab => vec![0x0b],
            Command::Init => vec![0x1b, 0x40],
            Command::Select => vec![0x1b, 0x3d, 0x01],
            Command::Reset => vec![0x1b, 0x3f, 0x0a, 0x00],
            Command::DrawerKick2 => vec![0x1b, 0x70, 0x00, 0x05, 0x05],
            Command::DrawerKick5 => vec![0x1b, 0x70, 0x01, 0x05, 0x05],
            Command::FullCut => vec![0x1d, 0x56, 0x00],
            Command::PartialCut => vec![0x1d, 0x56, 0x01],
            Command::TextNormal => vec![0x1b, 0x21, 0x00],
            Command::TextDoubleHeight => vec![0x1b, 0x21, 0x10],
            Command::TextDoubleWidth => vec![0x1b, 0x21, 0x20],
            Command::UnderlineOff => vec![0x1b, 0x2d, 0x00],
            Command::Underline1Dot => vec![0x1b, 0x2d, 0x01],
            Command::Underline2Dot => vec![0x1b, 0x2d, 0x02],
            Command::BoldOn => vec![0x1b, 0x45, 0x01],
            Command::BoldOff => vec![0x1b, 0x45, 0x00],
            Command::FontA => vec![0x1b, 0x21, 0x00],
            Command::FontB => vec![0x1b, 0x21, 0x01],
            Command::AlignLeft => vec![0x1b, 0x61, 0x00],
            Command::AlignCenter => vec![0x1b, 0x61, 0x01],
            Command::AlignRight => vec![0x1b, 0x61, 0x02],
            Command::InverseOn => vec![0x1d, 0x42, 0xff],
            Command::InverseOff => vec![0x1d, 0x42, 0x00],
            Command::LeftMargin => vec![0x1d, 0x4c],
            Command::PrintWidth => vec![0x1d, 0x57],
            Command::BarcodeHeight => vec![0x1d, 0x68],
            Command::BarcodeWidth => vec![0x1d, 0x77],
            Command::BarcodeEan8 => vec![0x1d, 0x6b, 0x44],
            Command::BarcodeEan13 => vec![0x1d, 0x6b, 0x43],
            Command::BarcodeCode39 => vec![0x1d, 0x6b, 0x45],
            Command::BarcodeCode128 => vec![0x1d, 0x6b, 0x49],
            Command::RasterNormal => vec![0x1d, 0x76, 0x30, 0x00],
            Command::RasterDoubleWidth => vec![0x1d, 0x76, 0x30, 0x01],
            Command::RasterDoubleHeight => vec![0x1d, 0x76, 0x30, 0x02],
            Command::RasterQuadruple => vec![0x1d, 0x76, 0x30, 0x03]
        }
    }
}
