//! Library components of the tooltip filler CLI.

pub mod listing;
pub mod logging;
pub mod pipeline;
