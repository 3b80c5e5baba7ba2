mod api_error;
pub use api_error::ApiError;
mod api_result;
pub use api_result::ApiResult;
mod conversion;
pub use conversion::{ConversionRequest, ConversionResponse};
mod error;
pub use error::{ConversionError, ProviderError};
mod exchange_rate;
pub use exchange_rate::ExchangeRate;
