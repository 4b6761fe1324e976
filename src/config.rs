use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::args::Args;
use crate::duration;
use crate::fs::get_home_dir;
use crate::resolver::ResolverSettings;
use crate::root;

#[derive(Default, Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Default, Deserialize, Debug)]
pub struct ResolverConfig {
    pub root: Option<String>,
    pub port: Option<u16>,
    pub timeout: Option<String>,
    pub max_iterations: Option<usize>,
    pub max_recursion_depth: Option<usize>,
    pub max_parse_jumps: Option<usize>,
}

impl Config {
    /// Command-line flags win over the config file.
    pub fn apply_args(mut self, args: &Args) -> Self {
        self.resolver.root = args.root.clone().or(self.resolver.root);
        self.resolver.port = args.port.or(self.resolver.port);
        self.resolver.timeout = args.timeout.clone().or(self.resolver.timeout);

        self
    }

    pub fn to_settings(&self) -> Result<ResolverSettings> {
        let mut settings = ResolverSettings::default();

        if let Some(root) = &self.resolver.root {
            settings.root = parse_root(root)?;
        }
        if let Some(port) = self.resolver.port {
            settings.port = port;
        }
        if let Some(timeout) = &self.resolver.timeout {
            settings.timeout = duration::parse(timeout)?;
        }
        if let Some(n) = self.resolver.max_iterations {
            settings.max_iterations = n;
        }
        if let Some(n) = self.resolver.max_recursion_depth {
            settings.max_recursion_depth = n;
        }
        if let Some(n) = self.resolver.max_parse_jumps {
            settings.max_parse_jumps = n;
        }

        Ok(settings)
    }
}

/// Explicit path must load; otherwise ~/.rdig/conf.toml is used when
/// present and the defaults apply when it is not.
pub fn load_config(path: Option<&str>) -> Result<Config> {
    if let Some(path) = path {
        return load(PathBuf::from(path));
    }

    if let Some(dir) = get_home_dir() {
        let path = dir.join("conf.toml");
        if path.exists() {
            return load(path);
        }
    }

    Ok(Config::default())
}

fn load(p: PathBuf) -> Result<Config> {
    let file = std::fs::read_to_string(p)?;

    let cfg: Config = toml::from_str(&file)?;

    Ok(cfg)
}

fn parse_root(s: &str) -> Result<Ipv4Addr> {
    if let Ok(addr) = Ipv4Addr::from_str(s) {
        return Ok(addr);
    }

    match root::find(s) {
        Some(addr) => Ok(addr),
        None => bail!("{} is neither an IPv4 address nor a known root server", s),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn settings_from_toml() {
        let cfg: Config = toml::from_str(
            r#"
            [resolver]
            root = "b.root-servers.net"
            timeout = "2s"
            max_iterations = 4
            "#,
        )
        .unwrap();

        let settings = cfg.to_settings().unwrap();

        assert_eq!(settings.root, Ipv4Addr::new(170, 247, 170, 2));
        assert_eq!(settings.timeout, std::time::Duration::from_secs(2));
        assert_eq!(settings.max_iterations, 4);
        assert_eq!(settings.port, 53);
    }

    #[test]
    fn unknown_root_is_rejected() {
        assert!(parse_root("z.root-servers.net").is_err());
        assert_eq!(parse_root("198.41.0.4").unwrap(), Ipv4Addr::new(198, 41, 0, 4));
    }
}
