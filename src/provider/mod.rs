mod provider;
pub use provider::RateProvider;
mod exchange_rates_api;
pub use exchange_rates_api::{ExchangeRatesApi, ExchangeRatesApiConf};
