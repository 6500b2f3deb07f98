pub mod document;
pub mod source;

pub use document::{Fixture, FixtureDocument, FixtureError};
pub use source::FixtureSource;
