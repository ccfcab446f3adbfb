//! Result and error rendering

pub mod console;
