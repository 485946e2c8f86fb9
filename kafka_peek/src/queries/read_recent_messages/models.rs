mod format;

pub use format::*;
