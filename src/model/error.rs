use thiserror::Error;

/// Everything that can go wrong between reading a conversion request and
/// answering it.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("request body is expected")]
    EmptyBody,

    #[error("request body must be valid JSON")]
    MalformedBody(#[source] serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("usd_quantity must be specified")]
    MissingField,

    /// Neither a number nor a string holding one.
    #[error("usd_quantity must be a positive number")]
    InvalidType,

    #[error("usd_quantity must be a positive number")]
    NegativeValue,

    /// The converted amount does not fit in an f64.
    #[error("usd_quantity is too large")]
    TooLarge,

    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl ConversionError {
    pub fn code(&self) -> u16 {
        match self {
            ConversionError::Upstream(e) => e.code(),
            _ => 400,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("exchange rate provider timed out")]
    Timeout(String),

    /// Connection failure or a non-2xx status.
    #[error("exchange rate provider is unavailable")]
    Unavailable(String),

    #[error("exchange rate provider returned an invalid response")]
    InvalidResponse(String),
}

impl ProviderError {
    pub fn code(&self) -> u16 {
        match self {
            ProviderError::Timeout(_) => 504,
            _ => 502,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout(e.to_string())
        } else {
            ProviderError::Unavailable(e.to_string())
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ConversionError, ProviderError};

    #[test]
    fn codes() {
        assert_eq!(ConversionError::EmptyBody.code(), 400);
        assert_eq!(ConversionError::NegativeValue.code(), 400);
        assert_eq!(ConversionError::TooLarge.code(), 400);
        let upstream: ConversionError = ProviderError::InvalidResponse("no RUB".into()).into();
        assert_eq!(upstream.code(), 502);
        let upstream: ConversionError = ProviderError::Timeout("deadline".into()).into();
        assert_eq!(upstream.code(), 504);
    }

    #[test]
    fn messages() {
        assert_eq!(
            ConversionError::InvalidType.to_string(),
            ConversionError::NegativeValue.to_string()
        );
        let upstream: ConversionError = ProviderError::InvalidResponse("no RUB".into()).into();
        assert_eq!(
            upstream.to_string(),
            "exchange rate provider returned an invalid response"
        );
    }
}
