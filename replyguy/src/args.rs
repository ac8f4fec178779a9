use std::path::PathBuf;

use clap::Parser;

/// Reply Guy reply generation service
#[derive(Debug, Parser)]
#[command(name = "replyguy", about = "AI-generated replies to social media posts")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "replyguy.toml", env = "REPLYGUY_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "REPLYGUY_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter directive (e.g. "info", "replyguy_reply=debug")
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["replyguy"]).unwrap();
        assert_eq!(args.config, PathBuf::from("replyguy.toml"));
        assert!(args.listen.is_none());
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "replyguy",
            "--config",
            "/etc/replyguy.toml",
            "--listen",
            "127.0.0.1:8080",
            "--log",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("/etc/replyguy.toml"));
        assert_eq!(args.listen, Some("127.0.0.1:8080".parse().unwrap()));
        assert_eq!(args.log, "debug");
    }
}
