mod layout;

pub use layout::*;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Result, WiringError};
use crate::strip::PixelSink;

/// Coordinate mapper for one clock face
///
/// Built once from the stencil shape and the wiring variant, read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Wiring {
    layout: WiringLayout,
    table: LayoutTable,
}

impl Wiring {
    /// Build the mapper from stencil rows
    pub fn new<S: AsRef<str>>(
        rows: &[S],
        layout: WiringLayout,
        minute_leds: Option<MinuteLeds>,
    ) -> Result<Self> {
        let dims = Dimensions::from_rows(rows)?;
        let table = layout.build(dims, minute_leds);

        info!(
            "Wiring configuration: {} layout, {}x{}, {} LEDs",
            layout,
            dims.width,
            dims.height,
            dims.led_count()
        );

        Ok(Self { layout, table })
    }

    /// Build the mapper for the configured language and wiring
    pub fn from_config(config: &Config) -> Result<Self> {
        let rows = config.stencil_rows()?;
        Self::new(rows, config.display.wiring_layout, config.display.minute_leds)
    }

    pub fn wiring_layout(&self) -> WiringLayout {
        self.layout
    }

    pub fn layout(&self) -> &LayoutTable {
        &self.table
    }

    pub fn dimensions(&self) -> Dimensions {
        self.table.dimensions()
    }

    pub fn width(&self) -> usize {
        self.table.width()
    }

    pub fn height(&self) -> usize {
        self.table.height()
    }

    /// Number of LEDs behind the letter grid
    pub fn led_count(&self) -> usize {
        self.dimensions().led_count()
    }

    /// Strip buffer length needed to reach every LED, minute LEDs included
    pub fn strip_length(&self) -> usize {
        self.led_count().max(self.table.max_index() + 1)
    }

    /// Physical index for a grid coordinate
    ///
    /// `(0, 0)` is top-left, `(W - 1, H - 1)` bottom-right. `y == H`
    /// addresses the minute row.
    pub fn index_from_2d(&self, x: usize, y: usize) -> Result<usize> {
        let index = self.table.index_at(x, y)?;
        debug!("({}, {}) -> LED {}", x, y, index);
        Ok(index)
    }

    /// Physical index for a position scanned top-left to bottom-right
    pub fn index_from_1d(&self, position: usize) -> Result<usize> {
        let led_count = self.led_count();
        if position >= led_count {
            return Err(WiringError::InvalidLinearIndex {
                index: position,
                led_count,
            });
        }
        let width = self.width();
        self.index_from_2d(position % width, position / width)
    }

    /// Physical index of minute marker 1-4
    pub fn index_from_minute(&self, minute: u8) -> Result<usize> {
        match minute_column(minute, self.width()) {
            Some(x) => self.index_from_2d(x, self.height()),
            None => {
                warn!("Minute marker out of range: {}", minute);
                Err(WiringError::InvalidMinute(minute))
            }
        }
    }

    /// Colour one grid coordinate
    pub fn set_color_by_2d<S: PixelSink>(
        &self,
        strip: &mut S,
        x: usize,
        y: usize,
        color: S::Color,
    ) -> Result<()> {
        let index = self.index_from_2d(x, y)?;
        strip.set_pixel_color(index, color);
        Ok(())
    }

    /// Colour linear positions, in the order given
    ///
    /// Every position is resolved before the first write, so an invalid
    /// position leaves the strip untouched.
    pub fn set_color_by_1d<S, I>(&self, strip: &mut S, positions: I, color: S::Color) -> Result<()>
    where
        S: PixelSink,
        I: IntoIterator<Item = usize>,
    {
        let indices = positions
            .into_iter()
            .map(|position| self.index_from_1d(position))
            .collect::<Result<Vec<_>>>()?;

        for index in indices {
            strip.set_pixel_color(index, color);
        }
        Ok(())
    }

    /// Colour one minute LED
    pub fn set_color_by_minute<S: PixelSink>(
        &self,
        strip: &mut S,
        minute: u8,
        color: S::Color,
    ) -> Result<()> {
        let index = self.index_from_minute(minute)?;
        strip.set_pixel_color(index, color);
        Ok(())
    }
}
