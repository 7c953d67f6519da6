pub mod rectify;

pub use rectify::{AxisAlignedSampler, Rectify};

use image::DynamicImage;
use tracing::{debug, warn};

use crate::common::{
    bitstream::BitStream,
    codec::{decode_text, unpack},
    error::{QRError, QRResult},
    grid::Matrix,
    layout::{finder_module, finder_origins, DataRegionIter, FINDER_SIZE},
    metadata::Version,
};

pub struct QRReader();

impl QRReader {
    pub fn read<M: Matrix>(grid: &M) -> QRResult<Vec<u8>> {
        let size = grid.size();
        debug!(size, "Reading QR...");
        if size < Version::MIN_SIZE {
            return Err(QRError::SymbolTooSmall { size });
        }
        let ver = Version::from_size(size)?;

        if !finders_match(grid)? {
            warn!("Finder patterns don't match, reading data region regardless");
        }

        debug!("Extracting payload...");
        let (mut bits, unassigned) = extract_payload(grid)?;

        debug!(bits = bits.len(), version = ver.number(), "Unpacking payload...");
        match (unpack(&mut bits, ver), unassigned) {
            (Ok(payload), _) => Ok(payload.into_data()),
            // Ran into the unassigned tail of the data region
            (Err(QRError::TruncatedStream { .. }), Some((row, col))) => {
                Err(QRError::UnassignedCell { row, col })
            }
            (Err(e), _) => Err(e),
        }
    }

    /// Reads the payload as text, one character per byte.
    pub fn read_text<M: Matrix>(grid: &M) -> QRResult<String> {
        Self::read(grid).map(|data| decode_text(&data))
    }

    pub fn read_image<R: Rectify>(img: &DynamicImage, rectifier: &R) -> QRResult<Vec<u8>> {
        debug!("Rectifying image...");
        let grid = rectifier.rectify(&img.to_luma8())?;
        Self::read(&grid)
    }
}

/// Collects data bits in traversal order up to the first unassigned module,
/// whose position is returned alongside.
fn extract_payload<M: Matrix>(grid: &M) -> QRResult<(BitStream, Option<(usize, usize)>)> {
    let mut bits = BitStream::with_capacity(grid.size() * grid.size());
    for (r, c) in DataRegionIter::new(grid.size()) {
        match grid.get(r, c)?.bit() {
            Some(bit) => bits.push(bit),
            None => return Ok((bits, Some((r, c)))),
        }
    }
    Ok((bits, None))
}

fn finders_match<M: Matrix>(grid: &M) -> QRResult<bool> {
    for (r0, c0) in finder_origins(grid.size()) {
        for i in 0..FINDER_SIZE {
            for j in 0..FINDER_SIZE {
                if grid.get(r0 + i, c0 + j)? != finder_module(i, j) {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}
