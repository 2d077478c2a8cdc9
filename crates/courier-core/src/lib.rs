pub mod book;
pub mod domain;
pub mod dto;
pub mod error;
pub mod extract;

pub use book::{OrderBook, StatusCounts};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use extract::{
    extract_customers, ExtractionPass, ExtractionReport, Extractor, ExtractorSettings,
};
