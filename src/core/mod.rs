//! Core value types shared by rendering and output

mod palette;
mod size;

pub use palette::*;
pub use size::*;
