use crate::domain::model::Dog;
use crate::utils::error::Result;

/// Lookup boundary over whatever holds the registry. Implementations report
/// an absent name as `LookupError::NotFound`.
pub trait DogRepository: Send + Sync {
    fn find_by_name(&self, name: &str) -> Result<Dog>;
}
