//! Background image sizing.
//!
//! The image is never decoded; only its header is read to learn the canvas
//! size, which is then mapped onto terminal cells.

use std::io;
use std::path::Path;

use image::ImageReader;
use ratatui::layout::Rect;

use crate::error::TriviaError;

pub const DEFAULT_BACKGROUND_PATH: &str = "background.png";

const PIXELS_PER_COLUMN: u32 = 8;
const PIXELS_PER_ROW: u32 = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Backdrop {
    width: u32,
    height: u32,
}

impl Backdrop {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TriviaError> {
        let path = path.as_ref();

        let reader = ImageReader::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => TriviaError::MissingBackgroundAsset {
                path: path.to_path_buf(),
            },
            _ => TriviaError::Io(err),
        })?;
        let (width, height) = reader.with_guessed_format()?.into_dimensions()?;

        tracing::debug!(path = %path.display(), width, height, "background loaded");
        Ok(Self { width, height })
    }

    /// No background: the canvas fills the whole terminal.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The canvas rectangle inside `area`, centered and clamped.
    pub fn canvas(&self, area: Rect) -> Rect {
        if self.width == 0 || self.height == 0 {
            return area;
        }

        let columns = to_cells(self.width, PIXELS_PER_COLUMN).min(area.width);
        let rows = to_cells(self.height, PIXELS_PER_ROW).min(area.height);

        Rect {
            x: area.x + (area.width - columns) / 2,
            y: area.y + (area.height - rows) / 2,
            width: columns,
            height: rows,
        }
    }
}

fn to_cells(pixels: u32, per_cell: u32) -> u16 {
    u16::try_from(pixels.div_ceil(per_cell)).unwrap_or(u16::MAX)
}
