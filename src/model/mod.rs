pub mod counts;
pub mod matrix;
