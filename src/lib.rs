//! Mars Photos library exports for testing

pub mod core;
pub mod network;
pub mod tui;

#[cfg(test)]
pub mod test_support;
