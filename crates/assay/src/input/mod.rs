//! Input loading: format dispatch, text decoding, and data representation.

mod encoding;
mod loader;
mod parquet;
mod parser;
mod source;

pub use encoding::{decode, detect_encoding};
pub use loader::{Loader, LoaderConfig};
pub use source::{Cell, Column, ColumnType, Dataset, SourceMetadata};
