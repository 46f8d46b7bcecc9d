pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod listing;
pub mod resolver;

pub use error::ResolveError;
pub use listing::InterpreterMajor;
pub use resolver::{resolve, ListingResolver, ResolvedInstaller};
