use crate::model::{ExchangeRate, ProviderError};

/// Source of the current USD/RUB exchange rate.
///
/// Implementations are queried once per conversion and must not cache.
#[rocket::async_trait]
pub trait RateProvider: Send + Sync {
    fn name(&self) -> String;

    async fn usd_rub(&self) -> Result<ExchangeRate, ProviderError>;
}
