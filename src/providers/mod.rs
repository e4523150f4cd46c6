//! Market data provider implementations

pub mod coincap;

pub use coincap::CoinCapProvider;
