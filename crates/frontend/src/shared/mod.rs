pub mod charts;
pub mod components;
pub mod number_format;
