//! Run reports: the JSON artifact and console rendering

pub mod console;
mod model;
mod writer;

pub use console::{print_summary, ConsoleObserver};
pub use model::{percent, RunReport};
pub use writer::write_json;
