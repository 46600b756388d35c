//! Library side of the `drugmap` command: logging setup and pipeline stages.

pub mod logging;
pub mod pipeline;
