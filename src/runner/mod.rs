pub mod converter;
pub mod reporter;
pub mod types;

pub use converter::Converter;
pub use reporter::ConversionReporter;
pub use types::{ConversionSummary, SkipReason, SkippedFixture};
