use crate::domain::model::Dog;
use crate::domain::ports::DogRepository;
use crate::utils::error::{LookupError, Result};
use std::collections::HashMap;

/// Registry held entirely in memory, keyed by dog name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDogRepository {
    dogs: HashMap<String, Dog>,
}

impl InMemoryDogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dog: Dog) {
        self.dogs.insert(dog.name.clone(), dog);
    }

    /// Fixed demo registry for the CLI.
    pub fn with_sample_data() -> Self {
        let mut repository = Self::new();
        for (name, age) in [("Fido", 4), ("Luna", 2), ("Max", 5), ("Nala", 3), ("Toby", 9)] {
            repository.insert(Dog::new(name, age));
        }
        repository
    }

    pub fn dogs(&self) -> impl Iterator<Item = &Dog> {
        self.dogs.values()
    }
}

impl DogRepository for InMemoryDogRepository {
    fn find_by_name(&self, name: &str) -> Result<Dog> {
        self.dogs
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                message: "The dog was not found".to_string(),
            })
    }
}
