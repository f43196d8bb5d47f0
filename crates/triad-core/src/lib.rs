pub mod codec;
pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{CodecError, ErrorKind, GenesisError, IdParseError, LoadError};
pub use types::*;
