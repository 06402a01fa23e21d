use crate::core::{Dog, DogRepository, Result};
use crate::utils::validation::validate_name;

/// Validates the requested name, then delegates to the repository. Holds the
/// repository for the lifetime of the service; one repository call per
/// validated lookup, none on the rejected path.
pub struct DogLookupService<R: DogRepository> {
    repository: R,
}

impl<R: DogRepository> DogLookupService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn find_by_name(&self, name: &str) -> Result<Dog> {
        validate_name(name)?;

        tracing::debug!("Looking up dog by name: {}", name);
        self.repository.find_by_name(name)
    }
}
