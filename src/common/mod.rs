pub mod bitstream;
pub mod codec;
pub mod error;
pub mod grid;
pub mod layout;
pub mod metadata;
pub mod version_db;

pub use bitstream::*;
pub use codec::*;
pub use error::*;
pub use grid::*;
pub use layout::*;
pub use metadata::*;
pub use version_db::*;
