//! Report serialization.

mod writer;

pub use writer::{REPORT_HEADER, write_report, write_report_to};
