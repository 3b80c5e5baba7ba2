use crate::{
    model::{ApiError, ApiResult, ConversionResponse},
    provider::RateProvider,
    service::conversion,
};
use rocket::{http::uri::Origin, post, State};
use tracing::debug;

static PATH: &str = "/convert/";

/// Rocket routes can't end in a slash, so the exact path is checked here.
#[post("/convert", data = "<body>")]
pub async fn post(
    uri: &Origin<'_>,
    body: String,
    provider: &State<Box<dyn RateProvider>>,
) -> ApiResult<ConversionResponse> {
    if uri.path().as_str() != PATH || uri.query().is_some() {
        debug!(%uri, "Undefined URL");
        return ApiResult::Err(ApiError::custom(404, "Undefined URL"));
    }

    let req = match conversion::validate(&body) {
        Ok(req) => req,
        Err(e) => return ApiResult::Err(e.into()),
    };

    conversion::convert(req, provider.inner().as_ref())
        .await
        .into()
}
