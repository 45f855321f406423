pub use alignment::{Alignment, GAP};
pub use op::Op;
pub use step::Step;

mod alignment;
mod op;
mod step;
