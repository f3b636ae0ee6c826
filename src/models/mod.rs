pub mod session;
pub mod timestamp;
