use clap::{Parser, Subcommand};

/// Command-line interface definition for shoplist
/// A shared shopping list served over HTTP, stored in SQLite
#[derive(Parser)]
#[command(
    name = "shoplist",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiny shared shopping list web app backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:8080
        #[arg(long = "bind")]
        bind: Option<String>,
    },

    /// Create the configuration file and the database schema
    Init,

    /// Show the effective configuration
    Config {
        /// Print the configuration (secret masked) to stdout
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
