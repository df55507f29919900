// Declares the main modules of the crate
pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;

// Collaborators built on top of the engine primitives
pub mod nn;
pub mod optim;
pub mod viz;

// Re-exports the Value type so it is reachable as `micrograd_core::Value`
pub use autograd::{OpKind, Operation};
pub use error::MicrogradError;
pub use value::Value;
