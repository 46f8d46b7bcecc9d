//! Command handlers: resolve (default) and list.

mod list;
mod resolve;
mod settings;

pub use list::run_list;
pub use resolve::run_resolve;
pub use settings::{parse_base_url, Settings};
