mod entry;
pub mod forms;
pub mod views;

pub use entry::router;
