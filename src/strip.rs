//! Strip driver seam
//!
//! The LED strip driver lives outside this crate. It receives physical
//! indices through [`PixelSink`] and its hardware settings through
//! [`StripSettings`].

use serde::{Deserialize, Serialize};

/// Anything that can colour a single LED by physical strip index
pub trait PixelSink {
    /// Colour type understood by the driver
    type Color: Copy;

    fn set_pixel_color(&mut self, index: usize, color: Self::Color);
}

/// Records every write, in call order
impl<C: Copy> PixelSink for Vec<(usize, C)> {
    type Color = C;

    fn set_pixel_color(&mut self, index: usize, color: C) {
        self.push((index, color));
    }
}

/// Hardware settings handed through to the strip driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripSettings {
    /// GPIO pin connected to the pixels (must support PWM)
    pub pin: u8,
    /// LED signal frequency in hertz
    pub freq_hz: u32,
    /// DMA channel used to generate the signal
    pub dma: u8,
    /// Invert the signal (NPN transistor level shift)
    pub invert: bool,
}

impl Default for StripSettings {
    fn default() -> Self {
        Self {
            pin: 18,
            freq_hz: 800_000,
            dma: 5,
            invert: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<(usize, (u8, u8, u8))> = Vec::new();
        sink.set_pixel_color(3, (255, 0, 0));
        sink.set_pixel_color(1, (0, 255, 0));
        assert_eq!(sink, vec![(3, (255, 0, 0)), (1, (0, 255, 0))]);
    }

    #[test]
    fn test_default_settings() {
        let settings = StripSettings::default();
        assert_eq!(settings.pin, 18);
        assert_eq!(settings.freq_hz, 800_000);
        assert_eq!(settings.dma, 5);
        assert!(!settings.invert);
    }
}
