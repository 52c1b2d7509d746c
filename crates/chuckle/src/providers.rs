pub mod base;
pub mod builtin;
pub mod configs;
pub mod factory;
pub mod remote;

#[cfg(any(test, feature = "testing"))]
pub mod mock;
