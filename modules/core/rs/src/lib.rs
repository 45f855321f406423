pub use alignable::{Alignable, Reversed};

mod alignable;
pub mod num;
