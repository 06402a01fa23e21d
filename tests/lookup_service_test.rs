use dog_lookup::{Dog, DogLookupService, InMemoryDogRepository, LookupError};

#[test]
fn test_lookup_through_in_memory_registry() {
    let mut repository = InMemoryDogRepository::new();
    repository.insert(Dog::new("Fido", 4));
    let service = DogLookupService::new(repository);

    let dog = service.find_by_name("Fido").unwrap();

    assert_eq!(dog.name, "Fido");
    assert_eq!(dog.age, 4);
}

#[test]
fn test_missing_dog_reports_not_found() {
    let service = DogLookupService::new(InMemoryDogRepository::new());

    let err = service.find_by_name("Rex").unwrap_err();

    assert!(matches!(err, LookupError::NotFound { .. }));
    assert_eq!(err.to_string(), "The dog was not found");
}

#[test]
fn test_empty_name_is_rejected() {
    let service = DogLookupService::new(InMemoryDogRepository::with_sample_data());

    let err = service.find_by_name("").unwrap_err();

    assert!(matches!(err, LookupError::InvalidName));
    assert_eq!(err.to_string(), "Name must not be null or empty");
}

#[test]
fn test_repeated_lookups_stay_consistent() {
    let service = DogLookupService::new(InMemoryDogRepository::with_sample_data());

    let first = service.find_by_name("Luna").unwrap();
    let second = service.find_by_name("Luna").unwrap();

    assert_eq!(first, second);
    assert_eq!(first.age, 2);
}
