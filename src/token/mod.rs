// Token persistence module.
// Stores the GitHub access token as a single value in the local config directory.

pub mod store;

pub use store::TokenStore;
