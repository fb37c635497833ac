//! ClarityCare CLI
//!
//! Terminal presentation layer over the ClarityCare core: loads the topic
//! dataset, filters and searches it, renders one topic at a time, and
//! surfaces the content-safety linter's findings to developers.

pub mod assets;
pub mod cli;
pub mod render;
pub mod store;

pub use assets::{AssetResolver, AssetStatus};
pub use cli::{Cli, Commands};
pub use store::{TopicStore, CATEGORIES};
