use crate::{
    model::{ConversionError, ConversionRequest, ConversionResponse},
    provider::RateProvider,
};
use serde_json::Value;
use tracing::debug;

pub fn validate(body: &str) -> Result<ConversionRequest, ConversionError> {
    debug!("Validating request body..");

    if body.is_empty() {
        debug!("..request body is empty");
        return Err(ConversionError::EmptyBody);
    }

    let body: Value = serde_json::from_str(body).map_err(ConversionError::MalformedBody)?;
    let body = body.as_object().ok_or(ConversionError::NotAnObject)?;

    let usd_quantity = usd_quantity(body.get("usd_quantity")).map_err(|e| {
        debug!(%e, "..usd_quantity is incorrect");
        e
    })?;

    debug!(usd_quantity, "..validation is successful");
    Ok(ConversionRequest { usd_quantity })
}

/// Numbers and numeric strings are accepted alike.
fn usd_quantity(value: Option<&Value>) -> Result<f64, ConversionError> {
    let quantity = match value {
        None | Some(Value::Null) => return Err(ConversionError::MissingField),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    let quantity = quantity
        .filter(|q| q.is_finite())
        .ok_or(ConversionError::InvalidType)?;

    if quantity < 0.0 {
        return Err(ConversionError::NegativeValue);
    }

    Ok(quantity)
}

pub async fn convert(
    req: ConversionRequest,
    provider: &dyn RateProvider,
) -> Result<ConversionResponse, ConversionError> {
    let rate = provider.usd_rub().await?;
    let usd_rate = rate.rate;

    debug!(usd_quantity = req.usd_quantity, ?rate, "Converting USD into RUB");

    let rub_quantity = req.usd_quantity * usd_rate;

    if !rub_quantity.is_finite() {
        debug!(usd_quantity = req.usd_quantity, "..conversion overflowed");
        return Err(ConversionError::TooLarge);
    }

    Ok(ConversionResponse {
        usd_quantity: req.usd_quantity,
        rub_quantity,
        usd_rate,
    })
}
