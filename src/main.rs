mod conf;
mod controller;
mod model;
mod provider;
mod service;

use crate::{
    conf::Conf,
    controller::{catcher, conversion},
    provider::{ExchangeRatesApi, RateProvider},
};
use anyhow::Result;
use rocket::{catchers, routes, Build, Rocket};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[rocket::main]
async fn main() -> Result<()> {
    let conf = Conf::new()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&conf.log)))
        .with(fmt::layer())
        .init();

    info!(
        address = %conf.address,
        port = conf.port,
        provider_url = %conf.provider.url,
        provider_timeout_secs = conf.provider.timeout_secs,
        "Loaded configuration"
    );

    let figment = rocket::Config::figment()
        .merge(("address", conf.address))
        .merge(("port", conf.port));

    let provider = ExchangeRatesApi::new(conf.provider)?;

    prepare(rocket::custom(figment), Box::new(provider))
        .launch()
        .await?;

    Ok(())
}

pub fn prepare(rocket: Rocket<Build>, provider: Box<dyn RateProvider>) -> Rocket<Build> {
    rocket
        .mount("/", routes![conversion::post])
        .register("/", catchers![catcher::not_found, catcher::default])
        .manage(provider)
}
