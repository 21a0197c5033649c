pub mod attendance;
pub mod core;
pub mod dashboard;
pub mod fees;
pub mod gallery;
pub mod media;
pub mod session;
