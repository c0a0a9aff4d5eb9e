#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use image::{Rgba, RgbaImage};

pub use band::{Band, BandId, DEFAULT_WEIGHT};
pub use event::{Emitter, FlagEvent};
pub use generator::FlagGenerator;
pub use layout::Segment;

pub mod band;
pub mod color;
pub mod event;
pub mod export;
pub mod generator;
pub mod layout;
pub mod logging;
pub mod preview;
pub mod render;

/// The size of the preview box, also the default canvas size.
pub const PREVIEW_SIZE: [u32; 2] = [500, 300];

/// The file name of exported images.
pub const FILE_NAME: &str = "flag.png";

/// The largest canvas width or height.
pub const MAX_DIMENSION: u32 = 16384;

/// The axis along which bands are laid out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Bands stacked top to bottom.
    #[default]
    Horizontal,
    /// Bands side by side, left to right.
    Vertical,
}

impl Orientation {
    /// Gets orientation from the state of a "vertical stripes" switch.
    pub fn from_vertical(vertical: bool) -> Orientation {
        if vertical {Orientation::Vertical} else {Orientation::Horizontal}
    }

    /// Returns `true` for vertical stripes.
    pub fn is_vertical(self) -> bool {self == Orientation::Vertical}

    /// Gets the canvas extent along the partition axis.
    pub fn extent(self, size: [u32; 2]) -> u32 {
        match self {
            Orientation::Horizontal => size[1],
            Orientation::Vertical => size[0],
        }
    }
}

/// Draws bands to a new image of `size`.
pub fn gen(bands: &[Band], orientation: Orientation, size: [u32; 2]) -> RgbaImage {
    let mut img = RgbaImage::new(size[0], size[1]);
    render::draw(bands, orientation, &mut img);
    img
}
