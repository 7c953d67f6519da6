use std::fmt::{Display, Formatter};

use super::error::{QRError, QRResult};

// Module
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum Module {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Module {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Bit carried by the module, `None` while unassigned.
    pub fn bit(self) -> Option<bool> {
        match self {
            Self::Empty => None,
            Self::Dark => Some(true),
            Self::Light => Some(false),
        }
    }

    pub fn select<T>(self, dark: T, light: T) -> T {
        if self.is_dark() {
            dark
        } else {
            light
        }
    }
}

impl From<bool> for Module {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// Matrix traits
//------------------------------------------------------------------------------

/// Read access to a square grid of modules.
pub trait Matrix {
    fn size(&self) -> usize;

    fn get(&self, r: usize, c: usize) -> QRResult<Module>;

    fn rows(&self) -> impl Iterator<Item = &[Module]> + '_;

    fn check_bounds(&self, r: usize, c: usize) -> QRResult<()> {
        let size = self.size();
        if r >= size || c >= size {
            return Err(QRError::OutOfBounds { row: r, col: c, size });
        }
        Ok(())
    }
}

pub trait MatrixMut: Matrix {
    fn set(&mut self, r: usize, c: usize, module: Module) -> QRResult<()>;
}

// Grid
//------------------------------------------------------------------------------

/// Dense row-major square grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    modules: Vec<Module>,
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> QRResult<Self> {
        if size == 0 {
            return Err(QRError::InvalidGridSize(size));
        }
        Ok(Self { modules: vec![Module::Empty; size * size], size })
    }

    /// Builds a fully assigned grid from rows of bits, e.g. the output of a
    /// binarizer. Accepts anything convertible to `bool` such as `0/1` bytes.
    pub fn from_rows<R, T>(rows: &[R]) -> QRResult<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<Bit>,
    {
        let size = rows.len();
        let mut grid = Self::new(size)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(QRError::InvalidGridShape { row: r, expected: size, found: row.len() });
            }
            for (c, &v) in row.iter().enumerate() {
                grid.modules[r * size + c] = Module::from(Into::<Bit>::into(v).0);
            }
        }
        Ok(grid)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|m| m.is_dark()).count()
    }

    pub fn count_empty_modules(&self) -> usize {
        self.modules.iter().filter(|m| matches!(m, Module::Empty)).count()
    }

    /// Row-major bits with unassigned modules read as light.
    pub fn to_bits(&self) -> Vec<Vec<bool>> {
        self.rows().map(|row| row.iter().map(|m| m.is_dark()).collect()).collect()
    }

    fn index(&self, r: usize, c: usize) -> QRResult<usize> {
        self.check_bounds(r, c)?;
        Ok(r * self.size + c)
    }
}

impl Matrix for Grid {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, r: usize, c: usize) -> QRResult<Module> {
        Ok(self.modules[self.index(r, c)?])
    }

    fn rows(&self) -> impl Iterator<Item = &[Module]> + '_ {
        self.modules.chunks_exact(self.size)
    }
}

impl MatrixMut for Grid {
    fn set(&mut self, r: usize, c: usize, module: Module) -> QRResult<()> {
        let i = self.index(r, c)?;
        self.modules[i] = module;
        Ok(())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for m in row {
                let ch = match m {
                    Module::Empty => ' ',
                    Module::Dark => '1',
                    Module::Light => '0',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A single binary sample accepted by [`Grid::from_rows`].
#[derive(Debug, Clone, Copy)]
pub struct Bit(bool);

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        Self(b)
    }
}

impl From<u8> for Bit {
    fn from(b: u8) -> Self {
        Self(b != 0)
    }
}
