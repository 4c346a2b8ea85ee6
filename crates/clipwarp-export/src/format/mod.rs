//! Container encoders

pub mod wav;
