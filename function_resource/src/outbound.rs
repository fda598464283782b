//! Concrete implementations of the outbound platform port

pub mod lambda;

#[cfg(any(test, feature = "mock"))]
pub mod mock;
