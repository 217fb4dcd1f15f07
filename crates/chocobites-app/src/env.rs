//! Build-time settings. See `build.rs` for the variable list and defaults.

include!(concat!(env!("OUT_DIR"), "/env.rs"));
