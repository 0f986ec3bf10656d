pub mod chunk;
pub mod document;
pub mod element;
pub mod location;

pub use chunk::Chunk;
pub use document::{Document, Scene, TitlePageEntry};
pub use element::{Element, ElementType};
pub use location::Location;
