//! Server configuration.
//!
//! Site and bundle settings come from leptos_config (`LEPTOS_*` variables,
//! exported by cargo-leptos from `[[workspace.metadata.leptos]]`). `HOST` and
//! `PORT` override the bind address on top of `LEPTOS_SITE_ADDR`.

use std::net::{IpAddr, SocketAddr};

use leptos::prelude::{LeptosOptions, get_configuration};

pub const DEFAULT_OUTPUT_NAME: &str = "hoops-mania";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid HOST '{0}': expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT '{0}': expected an integer in 0..=65535")]
    InvalidPort(String),
    #[error("LEPTOS_SITE_ROOT must not be blank")]
    EmptySiteRoot,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Resolved rendering options; `site_addr` is the bind address.
    pub leptos_options: LeptosOptions,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Read through leptos_config:
    /// - `LEPTOS_OUTPUT_NAME`: default `hoops-mania`
    /// - `LEPTOS_SITE_ROOT`: default `target/site`, blank is an error
    /// - `LEPTOS_SITE_PKG_DIR`, `LEPTOS_SITE_ADDR`, `LEPTOS_RELOAD_PORT`, `LEPTOS_ENV`
    ///
    /// Optional overrides:
    /// - `HOST`: bind IP, replaces the host part of `LEPTOS_SITE_ADDR`
    /// - `PORT`: bind port, replaces the port part of `LEPTOS_SITE_ADDR`
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        Self::resolve(
            conf.leptos_options,
            std::env::var("HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    /// Apply defaults, validation, and the `HOST`/`PORT` overrides to options
    /// loaded by leptos_config.
    pub fn resolve(
        mut options: LeptosOptions,
        host: Option<&str>,
        port: Option<&str>,
    ) -> Result<Self, ConfigError> {
        options.site_root = parse_site_root(&options.site_root)?.into();
        options.output_name = parse_output_name(&options.output_name).into();

        let host = parse_host(host)?.unwrap_or(options.site_addr.ip());
        let port = parse_port(port)?.unwrap_or(options.site_addr.port());
        options.site_addr = SocketAddr::new(host, port);

        Ok(Self { leptos_options: options })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.leptos_options.site_addr
    }

    pub fn site_root(&self) -> &str {
        &self.leptos_options.site_root
    }

    pub fn output_name(&self) -> &str {
        &self.leptos_options.output_name
    }
}

fn parse_host(raw: Option<&str>) -> Result<Option<IpAddr>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| ConfigError::InvalidHost(value.to_owned())),
    }
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

/// leptos_config only substitutes its default when the variable is unset, so
/// an explicitly blank value reaches here and would serve the working directory.
fn parse_site_root(raw: &str) -> Result<String, ConfigError> {
    match raw.trim() {
        "" => Err(ConfigError::EmptySiteRoot),
        value => Ok(value.to_owned()),
    }
}

/// leptos_config reports an empty name when neither the runtime nor the
/// build-time `LEPTOS_OUTPUT_NAME` is set.
fn parse_output_name(raw: &str) -> String {
    match raw.trim() {
        "" => DEFAULT_OUTPUT_NAME.to_owned(),
        value => value.to_owned(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
