//! Objective-C code generation modules.

pub mod marshal;
pub mod subscripts;

pub use marshal::{box_value, from_boxed, to_boxed, unbox_value};
pub use subscripts::SubscriptEmitter;
