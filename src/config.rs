use clap::Parser;

/// Command-line configuration.
///
/// The server takes exactly one argument, the listening port, accepted in
/// the range 1024-65535. An invalid or missing value prints usage and exits
/// before any socket is bound.
#[derive(Debug, Clone, Parser)]
#[command(name = "staticd", about = "Minimal HTTP/1.0 static file server")]
pub struct Config {
    /// Port to listen on
    #[arg(value_parser = clap::value_parser!(u16).range(1024..=65535))]
    pub port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
