//! Command-line configuration. The only externally supplied surface is `argv`: there is no
//! config file and nothing is read from the environment.

use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream resolver address, set via `--resolver`/`-r`. Absent means the forwarder
    /// synthesizes default answers instead of forwarding.
    pub resolver: Option<SocketAddr>,
    /// UDP port to bind on 127.0.0.1, set via `--port`/`-p`. Defaults to 2053.
    pub port: u16,
}

const DEFAULT_PORT: u16 = 2053;

impl Config {
    /// Parse `args` (normally `std::env::args().skip(1)`) into a `Config`.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Self> {
        let mut resolver = None;
        let mut port = DEFAULT_PORT;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--resolver" | "-r" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("{} requires a <host:port> argument", arg))?;
                    resolver = Some(
                        value
                            .parse()
                            .map_err(|e| anyhow::anyhow!("invalid --resolver address '{}': {}", value, e))?,
                    );
                }
                "--port" | "-p" => {
                    let value = args.next().ok_or_else(|| anyhow::anyhow!("{} requires a <port> argument", arg))?;
                    port = value
                        .parse()
                        .map_err(|e| anyhow::anyhow!("invalid --port value '{}': {}", value, e))?;
                }
                other => return Err(anyhow::anyhow!("unrecognized argument '{}'", other)),
            }
        }

        Ok(Config { resolver, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_with_no_arguments() {
        let config = Config::parse(args(&[])).unwrap();
        assert_eq!(config.resolver, None);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn resolver_flag_sets_upstream() {
        let config = Config::parse(args(&["--resolver", "8.8.8.8:53"])).unwrap();
        assert_eq!(config.resolver, Some("8.8.8.8:53".parse().unwrap()));
    }

    #[test]
    fn short_flags_are_accepted() {
        let config = Config::parse(args(&["-r", "1.1.1.1:53", "-p", "9999"])).unwrap();
        assert_eq!(config.resolver, Some("1.1.1.1:53".parse().unwrap()));
        assert_eq!(config.port, 9999);
    }

    #[test]
    fn missing_resolver_value_is_an_error() {
        assert!(Config::parse(args(&["--resolver"])).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(Config::parse(args(&["--bogus"])).is_err());
    }
}
