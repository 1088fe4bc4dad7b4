//! Cross-crate checks that drive `utilkit-core` and `utilkit-common`
//! against real files in temporary directories.

mod copying;
mod packing;
mod validation;
