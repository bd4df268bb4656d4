//! Domain layer: catalog model, build selection state and the frame-rate
//! estimation rules. Nothing in here performs I/O.
pub mod builtin;
pub mod domain;
pub mod policies;
pub mod services;
