pub mod paintings;

pub use paintings::*;
