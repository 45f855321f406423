pub use nwalign_core_rs::{Alignable, Reversed};
pub use pairwise::scoring::Score;

pub mod pairwise;
