use crate::{
    model::{ExchangeRate, ProviderError},
    provider::RateProvider,
};
use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub struct ExchangeRatesApi {
    conf: ExchangeRatesApiConf,
    client: Client,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeRatesApiConf {
    pub url: String,
    pub timeout_secs: u64,
}

#[derive(Deserialize)]
struct Latest {
    rates: Rates,
}

#[derive(Deserialize)]
struct Rates {
    #[serde(rename = "RUB")]
    rub: Option<f64>,
}

impl ExchangeRatesApi {
    pub fn new(conf: ExchangeRatesApiConf) -> Result<ExchangeRatesApi> {
        let client = Client::builder()
            .timeout(Duration::from_secs(conf.timeout_secs))
            .build()?;

        Ok(ExchangeRatesApi { conf, client })
    }
}

#[rocket::async_trait]
impl RateProvider for ExchangeRatesApi {
    fn name(&self) -> String {
        "exchangeratesapi".into()
    }

    async fn usd_rub(&self) -> Result<ExchangeRate, ProviderError> {
        debug!(provider = %self.name(), url = %self.conf.url, "Fetching usd/rub exchange rate...");

        let body = self
            .client
            .get(&self.conf.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rate = parse_rate(&body)?;
        debug!(provider = %self.name(), rate, "Fetched");

        Ok(ExchangeRate {
            quote: "RUB".to_string(),
            base: "USD".to_string(),
            rate,
        })
    }
}

fn parse_rate(body: &str) -> Result<f64, ProviderError> {
    let latest: Latest = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

    match latest.rates.rub {
        Some(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
        Some(rate) => Err(ProviderError::InvalidResponse(format!(
            "unexpected RUB rate {}",
            rate
        ))),
        None => Err(ProviderError::InvalidResponse("RUB rate is missing".into())),
    }
}
