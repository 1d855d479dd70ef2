//! PDF input and output.
//!
//! - [`reader`]: loading one input document and classifying failures
//! - [`writer`]: serializing the merged document, atomically by default

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
