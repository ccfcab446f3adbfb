//! Settings shared between the presentation and infrastructure layers.

mod output_format;

pub use output_format::OutputFormat;
