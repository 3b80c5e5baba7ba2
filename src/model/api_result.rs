use super::ApiError;
use rocket::{
    request::Request,
    response::{self, Responder},
    serde::json::Json,
};
use serde::Serialize;

pub enum ApiResult<T> {
    Ok(Json<T>),
    Err(ApiError),
}

impl<T, E: Into<ApiError>> From<Result<T, E>> for ApiResult<T> {
    fn from(result: Result<T, E>) -> ApiResult<T> {
        match result {
            Ok(val) => ApiResult::Ok(Json(val)),
            Err(e) => ApiResult::Err(e.into()),
        }
    }
}

impl<'r, T: Serialize> Responder<'r, 'static> for ApiResult<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        match self {
            ApiResult::Ok(json) => json.respond_to(req),
            ApiResult::Err(e) => e.respond_to(req),
        }
    }
}
