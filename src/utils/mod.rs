pub mod error;
pub mod validation;

#[cfg(feature = "cli")]
pub mod logger;
