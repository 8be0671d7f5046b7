pub mod bellaso;
pub mod caesar;
