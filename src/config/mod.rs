use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "dog-lookup")]
#[command(about = "Look up a registered dog by name")]
pub struct CliConfig {
    /// Name of the dog to look up
    #[arg(long, required_unless_present = "list")]
    pub name: Option<String>,

    /// Print the whole registry instead of looking up one dog
    #[arg(long)]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
