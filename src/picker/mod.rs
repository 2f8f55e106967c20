//! Generic picker module
//!
//! Provides a trait for list-based cursor movement, shared by the example
//! list instead of duplicating select_next/select_prev logic per list type.

mod traits;

pub use traits::Picker;
