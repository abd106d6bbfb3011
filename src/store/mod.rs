mod client;
pub mod keys;

pub use client::Store;
pub use keys::NewsKey;
