pub mod client;
pub mod provider;

pub use crate::domain::model::Greeting;
pub use crate::domain::ports::MessageProvider;
pub use crate::utils::error::Result;
