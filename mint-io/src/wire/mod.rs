//! Binary reader and writer abstractions for the mint wire format.

mod primitives;
mod reader;
mod traits;


pub use reader::SliceReader;
pub use traits::{WireDecode, WireEncode, WireRead, WireWrite};
