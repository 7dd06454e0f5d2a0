pub mod claims;
pub mod config;
pub mod error;
pub mod issuer;

pub use config::IssuerConfig;
pub use error::{IssueError, IssueResult};
pub use issuer::TokenIssuer;
