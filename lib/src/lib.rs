#![cfg_attr(not(test), no_std)]

pub mod klog;
pub mod numfmt;
pub mod string;

pub use klog::{
    KlogLevel, klog_get_level, klog_init, klog_is_enabled, klog_register_backend, klog_set_level,
};
pub use numfmt::{NumStr, reverse_in_place, to_decimal, to_hex};
pub use string::bytes_as_str;
