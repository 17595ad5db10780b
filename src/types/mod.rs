//! Core value types shared across the crate

pub mod handle;
pub mod structure;

pub use handle::Handle;
pub use structure::Structure;
