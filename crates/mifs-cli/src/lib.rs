//! Library side of the `mifs` command-line tool.
pub mod select;
pub mod util;
