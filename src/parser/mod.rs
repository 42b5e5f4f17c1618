//! Unit file reading module.

mod reader;

pub use reader::UnitReader;
