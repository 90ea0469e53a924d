pub mod painting;

pub use painting::*;
