//! The flag editor.

use std::path::{Path, PathBuf};

use crate::*;
use crate::event::{Emitter, FlagEvent};

/// Parses a canvas dimension from a numeric input field.
///
/// Returns `None` for anything but a positive number.
pub fn parse_dimension(s: &str) -> Option<u32> {
    let v: f64 = s.trim().parse().ok()?;
    if !v.is_finite() || v < 1.0 {return None};
    Some(v.min(MAX_DIMENSION as f64) as u32)
}

fn clamp_dimension(n: u32) -> u32 {n.clamp(1, MAX_DIMENSION)}

/// Holds the bands, the canvas and the listeners of one flag.
///
/// Every mutation redraws the canvas.
pub struct FlagGenerator {
    bands: Vec<(BandId, Band)>,
    orientation: Orientation,
    canvas: RgbaImage,
    events: Emitter<FlagEvent>,
    next_id: u64,
}

impl FlagGenerator {
    /// Creates a horizontal flag of [`PREVIEW_SIZE`] with two random bands.
    pub fn new() -> FlagGenerator {
        let mut g = FlagGenerator::empty(PREVIEW_SIZE);
        g.push(Band::new(None, None));
        g.push(Band::new(None, None));
        g.redraw();
        g
    }

    /// Creates a flag without bands.
    pub fn empty(size: [u32; 2]) -> FlagGenerator {
        let mut g = FlagGenerator {
            bands: vec![],
            orientation: Orientation::default(),
            canvas: RgbaImage::new(clamp_dimension(size[0]), clamp_dimension(size[1])),
            events: Emitter::new(),
            next_id: 0,
        };
        g.redraw();
        g
    }

    fn push(&mut self, band: Band) -> BandId {
        let id = BandId(self.next_id);
        self.next_id += 1;
        log::debug!("add {} {} weight {}", id, band.color, band.weight);
        self.bands.push((id, band));
        id
    }

    fn band_mut(&mut self, id: BandId) -> Option<&mut Band> {
        self.bands.iter_mut().find(|(i, _)| *i == id).map(|(_, b)| b)
    }

    /// Registers a listener for editor events.
    pub fn on_event(&mut self, f: impl FnMut(&FlagEvent) + 'static) -> event::ListenerId {
        self.events.on(f)
    }

    /// Gives access to the listeners.
    pub fn events_mut(&mut self) -> &mut Emitter<FlagEvent> {&mut self.events}

    /// Appends a band and redraws.
    ///
    /// See [`Band::new`] for how missing values are filled in.
    pub fn create_band(&mut self, weight: Option<f64>, color: Option<&str>) -> BandId {
        let id = self.push(Band::new(weight, color.map(String::from)));
        self.events.emit(&FlagEvent::BandAdded(id));
        self.redraw();
        id
    }

    /// Removes a band and redraws, returns `false` if there is no such band.
    pub fn remove_band(&mut self, id: BandId) -> bool {
        let index = match self.bands.iter().position(|(i, _)| *i == id) {
            None => return false,
            Some(i) => i,
        };
        self.bands.remove(index);
        log::debug!("remove {}", id);
        self.events.emit(&FlagEvent::BandRemoved(id));
        self.redraw();
        true
    }

    /// Sets the color of a band and redraws.
    pub fn set_color(&mut self, id: BandId, color: &str) -> bool {
        match self.band_mut(id) {
            None => return false,
            Some(b) => b.color = color.to_string(),
        }
        log::debug!("{} color {}", id, color);
        self.changed(id);
        true
    }

    /// Sets the weight of a band and redraws.
    ///
    /// Negative or non-finite weights become [`DEFAULT_WEIGHT`].
    pub fn set_weight(&mut self, id: BandId, weight: f64) -> bool {
        let weight = band::fix_weight(weight);
        match self.band_mut(id) {
            None => return false,
            Some(b) => b.weight = weight,
        }
        log::debug!("{} weight {}", id, weight);
        self.changed(id);
        true
    }

    /// Sets the weight of a band from text input.
    pub fn set_weight_input(&mut self, id: BandId, text: &str) -> bool {
        if text.trim().parse::<f64>().map_or(true, |v| band::fix_weight(v) != v) {
            log::warn!("invalid weight `{}`, using {}", text, DEFAULT_WEIGHT);
        }
        self.set_weight(id, band::parse_weight(text))
    }

    fn changed(&mut self, id: BandId) {
        self.events.emit(&FlagEvent::BandChanged(id));
        self.redraw();
    }

    /// Switches between horizontal and vertical stripes and redraws.
    pub fn set_vertical(&mut self, vertical: bool) {
        self.set_orientation(Orientation::from_vertical(vertical))
    }

    /// Sets the stripe direction and redraws.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        log::debug!("orientation {:?}", orientation);
        self.events.emit(&FlagEvent::OrientationChanged(orientation));
        self.redraw();
    }

    /// Resizes the canvas and redraws.
    ///
    /// Dimensions are clamped to `1..=MAX_DIMENSION`.
    pub fn set_size(&mut self, width: u32, height: u32) {
        let (width, height) = (clamp_dimension(width), clamp_dimension(height));
        self.canvas = RgbaImage::new(width, height);
        log::debug!("resize {}x{}", width, height);
        self.events.emit(&FlagEvent::Resized {width, height});
        self.redraw();
    }

    /// Sets the width from text input, keeping the current width if invalid.
    pub fn set_width_input(&mut self, text: &str) {
        let [w, h] = self.size();
        let w = parse_dimension(text).unwrap_or_else(|| {
            log::warn!("invalid width `{}`, keeping {}", text, w);
            w
        });
        self.set_size(w, h)
    }

    /// Sets the height from text input, keeping the current height if invalid.
    pub fn set_height_input(&mut self, text: &str) {
        let [w, h] = self.size();
        let h = parse_dimension(text).unwrap_or_else(|| {
            log::warn!("invalid height `{}`, keeping {}", text, h);
            h
        });
        self.set_size(w, h)
    }

    /// Clears the canvas and draws the stripes.
    pub fn redraw(&mut self) {
        let bands: Vec<Band> = self.bands.iter().map(|(_, b)| b.clone()).collect();
        render::draw(&bands, self.orientation, &mut self.canvas);
        log::debug!("redraw {} bands", bands.len());
        self.events.emit(&FlagEvent::Redrawn);
    }

    /// Writes the canvas to `dir/flag.png`.
    pub fn save(&mut self, dir: &Path) -> anyhow::Result<PathBuf> {
        let path = export::save(&self.canvas, dir)?;
        self.events.emit(&FlagEvent::Saved(path.clone()));
        Ok(path)
    }

    /// Encodes the canvas as a PNG data URL.
    pub fn data_url(&self) -> anyhow::Result<String> {export::data_url(&self.canvas)}

    /// Returns the bands in order.
    pub fn bands(&self) -> impl Iterator<Item = (BandId, &Band)> + '_ {
        self.bands.iter().map(|(i, b)| (*i, b))
    }

    /// Returns the number of bands.
    pub fn band_count(&self) -> usize {self.bands.len()}

    /// Looks up a band.
    pub fn band(&self, id: BandId) -> Option<&Band> {
        self.bands.iter().find(|(i, _)| *i == id).map(|(_, b)| b)
    }

    /// Returns the stripe direction.
    pub fn orientation(&self) -> Orientation {self.orientation}

    /// Returns `[width, height]` of the canvas.
    pub fn size(&self) -> [u32; 2] {
        let (w, h) = self.canvas.dimensions();
        [w, h]
    }

    /// Returns the canvas.
    pub fn canvas(&self) -> &RgbaImage {&self.canvas}

    /// Returns the canvas scaled to fit [`PREVIEW_SIZE`].
    pub fn preview(&self) -> RgbaImage {preview::preview(&self.canvas)}
}

impl Default for FlagGenerator {
    fn default() -> FlagGenerator {FlagGenerator::new()}
}
