pub mod loft;
pub mod planarize;

pub use loft::{AdjacencyMatrix, Loft, LoftParams, RepairPolicy};
pub use planarize::PlanarPath;
