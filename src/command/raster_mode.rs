use super::Command;
use serde::{Serialize, Deserialize};

/// Size selector for raster image printing
///
/// Not all sizes look good on all paper widths; quadruple easily overflows 58mm paper.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Hash)]
pub enum RasterMode {
    Normal,
    DoubleWidth,
    DoubleHeight,
    Quadruple
}

impl Eq for RasterMode{}

impl RasterMode {
    /// Returns the `GS v 0 m` selector for this size.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            RasterMode::Normal => Command::RasterNormal.as_bytes(),
            RasterMode::DoubleWidth => Command::RasterDoubleWidth.as_bytes(),
            RasterMode::DoubleHeight => Command::RasterDoubleHeight.as_bytes(),
            RasterMode::Quadruple => Command::RasterQuadruple.as_bytes()
        }
    }
}
