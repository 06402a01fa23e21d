use clap::Parser;
use dog_lookup::utils::logger;
use dog_lookup::{CliConfig, DogLookupService, InMemoryDogRepository, LookupError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dog-lookup CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let repository = InMemoryDogRepository::with_sample_data();

    if config.list {
        let mut dogs: Vec<_> = repository.dogs().cloned().collect();
        dogs.sort_by(|a, b| a.name.cmp(&b.name));
        println!("{}", serde_json::to_string_pretty(&dogs)?);
        return Ok(());
    }

    let name = config.name.unwrap_or_default();
    let service = DogLookupService::new(repository);

    match service.find_by_name(&name) {
        Ok(dog) => {
            tracing::info!("Found {} (age {})", dog.name, dog.age);
            println!("{}", serde_json::to_string_pretty(&dog)?);
        }
        Err(e @ LookupError::InvalidName) => {
            tracing::error!("Lookup rejected: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
