pub mod cohort;
pub mod patient;

pub use cohort::*;
pub use patient::*;
