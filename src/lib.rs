pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::InMemoryDogRepository;
pub use core::service::DogLookupService;
pub use domain::model::Dog;
pub use domain::ports::DogRepository;
pub use utils::error::{LookupError, Result};
