pub mod service;

pub use crate::domain::model::Dog;
pub use crate::domain::ports::DogRepository;
pub use crate::utils::error::Result;
