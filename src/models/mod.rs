//! Shared types: the wallet row and its request-scoped shape.

pub mod wallet;

pub use wallet::{NewWallet, Wallet};
