use crate::model::ApiError;
use rocket::{catch, http::Status, Request};
use tracing::debug;

#[catch(404)]
pub fn not_found(req: &Request) -> ApiError {
    debug!(method = %req.method(), uri = %req.uri(), "Undefined URL");
    ApiError::custom(404, "Undefined URL")
}

#[catch(default)]
pub fn default(status: Status, req: &Request) -> ApiError {
    debug!(%status, uri = %req.uri(), "Request rejected");
    status.into()
}

#[cfg(test)]
mod test {
    use crate::test::{client, error_message, FixedRateProvider};
    use rocket::http::{ContentType, Status};

    #[test]
    fn not_found() {
        let client = client(FixedRateProvider);
        let res = client
            .post("/unknown/")
            .header(ContentType::JSON)
            .body(r#"{"usd_quantity": 5}"#)
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
        assert_eq!(res.content_type(), Some(ContentType::JSON));
        assert_eq!(error_message(res), "Undefined URL");
    }

    #[test]
    fn payload_too_large() {
        let client = client(FixedRateProvider);
        let body = format!(r#"{{"usd_quantity": 5, "padding": "{}"}}"#, "x".repeat(64 * 1024));
        let res = client.post("/convert/").body(body).dispatch();
        assert_eq!(res.status(), Status::PayloadTooLarge);
        assert_eq!(error_message(res), "Payload Too Large");
    }
}
