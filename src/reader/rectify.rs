use image::GrayImage;
use imageproc::contrast::otsu_level;
use tracing::{debug, trace};

use crate::common::{
    error::{QRError, QRResult},
    grid::Grid,
    layout::FINDER_SIZE,
};

// Rectify
//------------------------------------------------------------------------------

/// Turns a raster image into a binary grid of modules. Localisation,
/// perspective correction and binarisation all live behind this trait.
pub trait Rectify {
    fn rectify(&self, img: &GrayImage) -> QRResult<Grid>;
}

// Axis aligned sampler
//------------------------------------------------------------------------------

/// Samples symbols that are upright and unskewed, such as the output of
/// [`crate::QR::render`], surrounded by a light quiet zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisAlignedSampler {
    // Luma values at or below are dark. Otsu's level when unset
    threshold: Option<u8>,
}

impl AxisAlignedSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold: Some(threshold) }
    }
}

impl Rectify for AxisAlignedSampler {
    fn rectify(&self, img: &GrayImage) -> QRResult<Grid> {
        let threshold = self.threshold.unwrap_or_else(|| otsu_level(img));
        let is_dark = |x: u32, y: u32| img.get_pixel(x, y).0[0] <= threshold;
        trace!(threshold, "Binarizing image");

        let (left, top, right, bottom) = dark_bounds(img, is_dark).ok_or(QRError::SymbolNotFound)?;
        let pitch = finder_pitch(left, top, right, bottom, is_dark).ok_or(QRError::SymbolNotFound)?;

        let (w, h) = ((right - left + 1) as f64, (bottom - top + 1) as f64);
        let size = (w / pitch).round() as usize;
        if size < FINDER_SIZE || size != (h / pitch).round() as usize {
            return Err(QRError::SymbolNotFound);
        }
        debug!(size, pitch, left, top, "Located symbol");

        let (dx, dy) = (w / size as f64, h / size as f64);
        let rows = (0..size)
            .map(|r| {
                let y = top + ((r as f64 + 0.5) * dy) as u32;
                (0..size).map(|c| is_dark(left + ((c as f64 + 0.5) * dx) as u32, y)).collect()
            })
            .collect::<Vec<Vec<bool>>>();
        Grid::from_rows(&rows)
    }
}

// Inclusive bounding box of dark pixels
fn dark_bounds(img: &GrayImage, is_dark: impl Fn(u32, u32) -> bool) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = img.dimensions();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..h {
        for x in 0..w {
            if !is_dark(x, y) {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
            });
        }
    }
    bounds
}

/// Module pitch in pixels, measured along the diagonal of the top left finder.
/// The diagonal crosses dark:light:dark:light runs of 1:1:3:1 modules before
/// the outer ring, which may merge with an adjacent dark data module.
fn finder_pitch(
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
    is_dark: impl Fn(u32, u32) -> bool,
) -> Option<f64> {
    let mut runs = [0_u32; 4];
    let mut i = 0;
    let mut color = true;
    let mut k = 0;
    while left + k <= right && top + k <= bottom {
        if is_dark(left + k, top + k) != color {
            color = !color;
            i += 1;
            if i == runs.len() {
                break;
            }
        }
        runs[i] += 1;
        k += 1;
    }
    if i < runs.len() {
        return None;
    }
    Some(runs.iter().sum::<u32>() as f64 / 6.0)
}
