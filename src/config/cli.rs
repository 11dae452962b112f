use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bookstore-api")]
#[command(about = "A small bookstore catalog HTTP API")]
pub struct CliConfig {
    #[arg(long, help = "Address to listen on (host:port)")]
    pub bind: Option<String>,

    #[arg(long, help = "Path to a books JSON file replacing the built-in seed")]
    pub books: Option<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
