#[macro_use]
mod par;

pub mod align;
pub mod alphabet;
pub mod error;
pub mod matrix;
