use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::common::{
    bitstream::BitStream,
    error::{QRError, QRResult},
    grid::{Grid, Matrix, MatrixMut, Module},
    layout::{draw_finder_patterns, DataRegionIter},
    metadata::{ECLevel, Version},
};

#[derive(Debug, Clone)]
pub struct QR {
    grid: Grid,
    ver: Version,
    ecl: ECLevel,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new(ver: Version, ecl: ECLevel) -> QRResult<Self> {
        Ok(Self { grid: Grid::new(ver.size())?, ver, ecl })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn into_parts(self) -> (Grid, Version) {
        (self.grid, self.ver)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.count_dark_modules()
    }

    pub fn metadata(&self) -> String {
        format!("{{ Version: {}, Ec level: {} }}", self.ver, self.ecl)
    }
}

// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_finder_patterns(&mut self) -> QRResult<()> {
        draw_finder_patterns(&mut self.grid)
    }
}

// Data region
//------------------------------------------------------------------------------

impl QR {
    /// Streams `payload` into the data modules in traversal order and returns
    /// the number of data modules left unassigned once the bits run out.
    /// Overflow is reported in bits, against the data module count.
    pub(crate) fn draw_data_region(&mut self, payload: BitStream) -> QRResult<usize> {
        let max = DataRegionIter::new(self.size()).count();
        let required = payload.len();
        if required > max {
            return Err(QRError::CapacityExceeded { required, max });
        }
        for ((r, c), bit) in DataRegionIter::new(self.size()).zip(payload) {
            self.grid.set(r, c, Module::from(bit))?;
        }
        Ok(max - required)
    }
}


// Render
//------------------------------------------------------------------------------

/// Raster settings. Unassigned modules are painted with `light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub module_size: u32,
    // Quiet zone width in modules
    pub margin: u32,
    pub dark: [u8; 3],
    pub light: [u8; 3],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { module_size: 10, margin: 4, dark: [0, 0, 0], light: [255, 255, 255] }
    }
}

impl RenderOptions {
    pub fn canvas_size(&self, size: usize) -> u32 {
        (size as u32 + 2 * self.margin) * self.module_size
    }
}

impl QR {
    pub fn render(&self, module_sz: u32) -> GrayImage {
        let opts = RenderOptions { module_size: module_sz, ..Default::default() };
        let qz_sz = opts.margin * module_sz;
        let qr_sz = self.size() as u32 * module_sz;
        let total_sz = opts.canvas_size(self.size());

        GrayImage::from_fn(total_sz, total_sz, |x, y| {
            if x < qz_sz || x >= qz_sz + qr_sz || y < qz_sz || y >= qz_sz + qr_sz {
                return Luma([255]);
            }
            let (r, c) = ((y - qz_sz) / module_sz, (x - qz_sz) / module_sz);
            let m = self.module_at(r as usize, c as usize);
            Luma([m.select(0, 255)])
        })
    }

    pub fn render_with(&self, opts: &RenderOptions) -> RgbImage {
        let module_sz = opts.module_size;
        let qz_sz = opts.margin * module_sz;
        let qr_sz = self.size() as u32 * module_sz;
        let total_sz = opts.canvas_size(self.size());

        RgbImage::from_fn(total_sz, total_sz, |x, y| {
            if x < qz_sz || x >= qz_sz + qr_sz || y < qz_sz || y >= qz_sz + qr_sz {
                return Rgb(opts.light);
            }
            let (r, c) = ((y - qz_sz) / module_sz, (x - qz_sz) / module_sz);
            let m = self.module_at(r as usize, c as usize);
            Rgb(m.select(opts.dark, opts.light))
        })
    }

    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = 4 * module_sz;
        let qr_sz = self.size() * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz + 1) * 3);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let m = self.module_at((i - qz_sz) / module_sz, (j - qz_sz) / module_sz);
                canvas.push(m.select(' ', '█'));
            }
            canvas.push('\n');
        }

        canvas
    }

    // Pixel coordinates are derived from the grid size, so they never overflow it
    fn module_at(&self, r: usize, c: usize) -> Module {
        self.grid.get(r, c).unwrap_or_default()
    }
}
