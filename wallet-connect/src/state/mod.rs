//! Reactive application state

pub mod session;
pub mod wallet;
