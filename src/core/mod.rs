pub mod loader;
pub mod report;
pub mod timestamp;
