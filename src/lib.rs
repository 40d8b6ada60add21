pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{datamuse::DatamuseClient, noun_list::HttpNounList};
pub use crate::config::Settings;
pub use crate::core::{prompt::Console, rhyme::RhymeClient, session::Session};
pub use crate::utils::error::{LimerickError, Result};
