//! In-memory store - fallback backend and test double.

mod store;

pub use store::{InMemoryPostStore, Operation};

#[cfg(test)]
mod tests;
