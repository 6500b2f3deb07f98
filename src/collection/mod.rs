pub mod builder;
pub mod types;
pub mod writer;

pub use builder::build_item;
pub use types::{Collection, CollectionInfo, Item};
pub use writer::CollectionWriter;
