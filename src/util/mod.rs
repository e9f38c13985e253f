//! Utility modules

pub mod number;

pub use number::{
    clamp, clamp_to_range, parse_committed, parse_display, parse_int_prefix, truncate_input,
    INPUT_MODE_THRESHOLD, MAX_INPUT_LENGTH,
};
