use crate::provider::ExchangeRatesApiConf;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{env, net::IpAddr};

static DEFAULT_CONF: &str = include_str!("../converter.conf");

#[derive(Debug, Deserialize)]
pub struct Conf {
    pub address: IpAddr,
    pub port: u16,
    pub log: String,
    pub provider: ExchangeRatesApiConf,
}

impl Conf {
    pub fn new() -> Result<Conf> {
        Ok(Conf::figment().extract()?)
    }

    /// Built-in defaults, then the optional override file, then the environment.
    pub fn figment() -> Figment {
        let custom_conf_path =
            env::var("CONVERTER_CONF").unwrap_or_else(|_| "converter.conf".to_string());

        Figment::new()
            .merge(Toml::string(DEFAULT_CONF))
            .merge(Toml::file(custom_conf_path))
            .merge(Env::raw().only(&["port", "address", "log"]))
    }
}
