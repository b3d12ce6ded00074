extern crate serde;

use super::Command;
use serde::{Serialize, Deserialize};

/// Fonts available on the printer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq)]
pub enum Font {
    FontA,
    FontB
}

impl Eq for Font{}

impl Font {
    /// The escape sequence that selects this font.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Font::FontA => Command::FontA.as_bytes(),
            Font::FontB => Command::FontB.as_bytes()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Justification {
    Left,
    Center,
    Right
}

impl Justification {
    /// The escape sequence that selects this justification.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Justification::Left => Command::AlignLeft.as_bytes(),
            Justification::Center => Command::AlignCenter.as_bytes(),
            Justification::Right => Command::AlignRight.as_bytes()
        }
    }
}

/// Underline styles. The printer supports a thin and a thick underline.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum UnderlineMode {
    Off,
    OneDot,
    TwoDot
}

impl UnderlineMode {
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            UnderlineMode::Off => Command::UnderlineOff.as_bytes(),
            UnderlineMode::OneDot => Command::Underline1Dot.as_bytes(),
            UnderlineMode::TwoDot => Command::Underline2Dot.as_bytes()
        }
    }
}

/// Target state for the printer's text formatting registers
///
/// One `TextFormat` describes the full text state, and gets applied with a single write by
/// [set](crate::Printer::set). The default value restores the power-on state: normal size,
/// no underline, no bold, font A, left justification.
/// ```rust
/// use zonerich_escpos::command::{TextFormat, Justification};
/// let format = TextFormat {
///     bold: true,
///     justification: Justification::Center,
///     ..Default::default()
/// };
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct TextFormat {
    pub double_height: bool,
    pub double_width: bool,
    pub underline: UnderlineMode,
    pub bold: bool,
    pub font: Font,
    pub justification: Justification
}

impl Default for TextFormat {
    fn default() -> TextFormat {
        TextFormat {
            double_height: false,
            double_width: false,
            underline: UnderlineMode::Off,
            bold: false,
            font: Font::FontA,
            justification: Justification::Left
        }
    }
}

impl TextFormat {
    /// Assembles the escape sequences that bring the printer to this state.
    ///
    /// The firmware drives double height and double width through separate ESC ! values, so
    /// height wins when both are requested. Size comes first, then underline, bold, font,
    /// and justification.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut feed = Vec::new();
        let size = if self.double_height {
            Command::TextDoubleHeight
        } else if self.double_width {
            Command::TextDoubleWidth
        } else {
            Command::TextNormal
        };
        feed.extend_from_slice(&size.as_bytes());
        feed.extend_from_slice(&self.underline.as_bytes());
        feed.extend_from_slice(&if self.bold {
            Command::BoldOn.as_bytes()
        } else {
            Command::BoldOff.as_bytes()
        });
        feed.extend_from_slice(&self.font.as_bytes());
        feed.extend_from_slice(&self.justification.as_bytes());
        feed
    }
}

#[cfg(test)]
mod tests {
    use super::{TextFormat, UnderlineMode};

    #[test]
    fn default_format_restores_power_on_state() {
        assert_eq!(TextFormat::default().as_bytes(), vec![
            0x1b, 0x21, 0x00, // normal size
            0x1b, 0x2d, 0x00, // underline off
            0x1b, 0x45, 0x00, // bold off
            0x1b, 0x21, 0x00, // font A
            0x1b, 0x61, 0x00  // align left
        ]);
    }

    #[test]
    fn double_height_wins_over_double_width() {
        let format = TextFormat {
            double_height: true,
            double_width: true,
            ..Default::default()
        };
        assert_eq!(&format.as_bytes()[..3], [0x1b, 0x21, 0x10]);
    }

    #[test]
    fn underline_modes() {
        assert_eq!(UnderlineMode::OneDot.as_bytes(), vec![0x1b, 0x2d, 0x01]);
        assert_eq!(UnderlineMode::TwoDot.as_bytes(), vec![0x1b, 0x2d, 0x02]);
    }
}
