#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{client::MessengerClient, provider::StaticMessageProvider};
pub use crate::domain::model::Greeting;
pub use crate::domain::ports::MessageProvider;
pub use crate::utils::error::{MessengerError, Result};
