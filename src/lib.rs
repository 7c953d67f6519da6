//! # qrlite
//!
//! A Rust library for generating and reading a simplified QR-style matrix symbol.
//! Byte payloads are packed into a bit stream and laid out in a square grid framed
//! by three finder patterns. Reading walks the same grid in the same order and
//! unpacks the bit stream back into bytes.
//!
//! ## Features
//!
//! - **Symbol Generation**: Pick the smallest version that fits the payload, or fix one
//! - **Symbol Reading**: Decode a binary grid, or an upright rendered image, back to bytes
//! - **Capacity Levels**: Capacity tables per error correction level (L, M, Q, H)
//! - **Rendering**: Grayscale and RGB images with a configurable quiet zone
//!
//! The format intentionally leaves out error correction codewords, masking, timing and
//! alignment patterns, and every mode other than raw bytes.
//!
//! ## Quick Start
//!
//! ### Generating a Symbol
//!
//! ```rust
//! use qrlite::{ECLevel, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"Hello, World!")
//!     .ec_level(ECLevel::L)  // Capacity column - if not provided, defaults to ECLevel::M
//!     .build()?;
//!
//! assert_eq!(qr.version().number(), 1);
//! let img = qr.render(4);  // 4x scale factor
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading a Symbol
//!
//! ```rust
//! use qrlite::{Grid, QRBuilder, QRReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"A").build()?;
//!
//! // A binarized grid handed over by an image pipeline
//! let grid = Grid::from_rows(&qr.grid().to_bits())?;
//! assert_eq!(QRReader::read(&grid)?, b"A");
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading an Image
//!
//! ```rust
//! use qrlite::{AxisAlignedSampler, QRBuilder, QRReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"pixels").build()?;
//! let img = image::DynamicImage::ImageLuma8(qr.render(3));
//! assert_eq!(QRReader::read_image(&img, &AxisAlignedSampler::new())?, b"pixels");
//! # Ok(())
//! # }
//! ```
//!
//! ## Symbol Components
//!
//! ### Versions
//! - Versions 1-15, with sizes from 21x21 to 77x77 modules (`17 + 4 * version`)
//! - Versions 10 and up carry a 16 bit length field, lower versions an 8 bit one
//!
//! ### Finder Patterns
//! - 7x7 blocks at the top left, top right and bottom left corners only
//!
//! ### Data Region
//! - Every other module, filled in column pairs from the bottom right corner upwards.
//!   Modules past the end of the payload stay unassigned and render as light.

pub mod builder;
pub(crate) mod common;
pub mod reader;

pub use builder::{QRBuilder, RenderOptions, QR};
pub use common::bitstream::BitStream;
pub use common::codec::{decode_text, encode_text, pack, unpack, Payload};
pub use common::error::{ErrorKind, QRError, QRResult};
pub use common::grid::{Bit, Grid, Matrix, MatrixMut, Module};
pub use common::layout::{blank_symbol, is_reserved, DataRegionIter, FINDER_SIZE};
pub use common::metadata::{ECLevel, Mode, Version};
pub use common::version_db::{max_capacity, select_version};
pub use reader::{AxisAlignedSampler, QRReader, Rectify};
