pub use alignment::{Alignment, Op, Step};
pub use nw::{align, Engine};
pub use scoring::ScoringScheme;

pub mod alignment;
pub mod nw;
pub mod scoring;
