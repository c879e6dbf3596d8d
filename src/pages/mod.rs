pub mod charts;
pub mod dashboard;
pub mod tables;
pub mod upload;
