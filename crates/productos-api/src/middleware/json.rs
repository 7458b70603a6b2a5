use axum::{
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// JSON body extractor whose rejection is itself a JSON payload. No field
/// validation is applied beyond deserialization.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "error": "Invalid JSON",
                    "message": rejection.body_text(),
                });
                (rejection_status(&rejection), axum::Json(payload))
            })?;

        Ok(Self(value))
    }
}

// Well-formed JSON of the wrong shape is a bad request, same as a syntax error.
fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    match rejection {
        JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
        other => other.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Item {
        #[allow(dead_code)]
        name: String,
    }

    async fn accept(JsonBody(_item): JsonBody<Item>) -> StatusCode {
        StatusCode::OK
    }

    async fn post_json(content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let app = Router::new().route("/items", post(accept));
        let mut builder = Request::builder().method("POST").uri("/items");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body.to_owned())).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let (status, json) = post_json(Some("application/json"), r#"{"other":1}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid JSON");
    }

    #[tokio::test]
    async fn syntax_error_is_bad_request() {
        let (status, _) = post_json(Some("application/json"), "{").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_keeps_axum_status() {
        let (status, _) = post_json(None, r#"{"name":"x"}"#).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn valid_body_is_accepted() {
        let (status, _) = post_json(Some("application/json"), r#"{"name":"x"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }
}
