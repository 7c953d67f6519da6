use super::error::{QRError, QRResult};
use super::grid::{Grid, MatrixMut, Module};
use super::metadata::Version;

pub const FINDER_SIZE: usize = 7;

// Finder pattern
//------------------------------------------------------------------------------

/// Top-left corners of the three finder patterns. There is no bottom-right
/// finder.
pub fn finder_origins(size: usize) -> [(usize, usize); 3] {
    let far = size - FINDER_SIZE;
    [(0, 0), (0, far), (far, 0)]
}

/// Whether `(r, c)` lies inside one of the finder blocks.
pub fn is_reserved(r: usize, c: usize, size: usize) -> bool {
    let near = |x: usize| x < FINDER_SIZE;
    let far = |x: usize| x + FINDER_SIZE >= size;
    (near(r) && near(c)) || (near(r) && far(c)) || (far(r) && near(c))
}

/// Finder module at local coordinates `(i, j)` of a 7x7 block.
pub fn finder_module(i: usize, j: usize) -> Module {
    debug_assert!(i < FINDER_SIZE && j < FINDER_SIZE, "Outside finder: ({i}, {j})");
    match (i, j) {
        (0 | 6, _) | (_, 0 | 6) => Module::Dark,
        (1 | 5, _) | (_, 1 | 5) => Module::Light,
        _ => Module::Dark,
    }
}

pub fn draw_finder_patterns<M: MatrixMut>(grid: &mut M) -> QRResult<()> {
    let size = grid.size();
    if size < FINDER_SIZE {
        return Err(QRError::InvalidGridSize(size));
    }
    for (r0, c0) in finder_origins(size) {
        for i in 0..FINDER_SIZE {
            for j in 0..FINDER_SIZE {
                grid.set(r0 + i, c0 + j, finder_module(i, j))?;
            }
        }
    }
    Ok(())
}

/// Grid with only the finder patterns drawn and every data module unassigned.
pub fn blank_symbol(size: usize) -> QRResult<Grid> {
    if size < Version::MIN_SIZE {
        return Err(QRError::InvalidGridSize(size));
    }
    let mut grid = Grid::new(size)?;
    draw_finder_patterns(&mut grid)?;
    Ok(grid)
}


// Data region traversal
//------------------------------------------------------------------------------

/// Yields every non-reserved module exactly once, in the order shared by
/// the builder and the reader: column pairs from the right edge leftwards,
/// rows bottom to top, right column of the pair before the left.
#[derive(Debug, Clone)]
pub struct DataRegionIter {
    r: isize,
    c: isize,
    offset: isize,
    size: usize,
}

impl DataRegionIter {
    pub fn new(size: usize) -> Self {
        let last = size as isize - 1;
        Self { r: last, c: last, offset: 0, size }
    }

    // Moves to the next visited position, ignoring reservation
    fn advance(&mut self) {
        if self.offset == 0 {
            self.offset = 1;
            return;
        }
        self.offset = 0;
        if self.r > 0 {
            self.r -= 1;
        } else {
            self.r = self.size as isize - 1;
            self.c -= 2;
        }
    }
}

impl Iterator for DataRegionIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.c >= 0 {
            let (r, c) = (self.r, self.c - self.offset);
            self.advance();
            if c < 0 {
                continue;
            }
            let (r, c) = (r as usize, c as usize);
            if !is_reserved(r, c, self.size) {
                return Some((r, c));
            }
        }
        None
    }
}
