use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
};

/// Integer `{id}` path segment. A segment that is not an `i32` means the
/// route does not match, so it is rejected with 404 rather than 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteId(pub i32);

impl<S> FromRequestParts<S> for RouteId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn echo(RouteId(id): RouteId) -> String {
        id.to_string()
    }

    async fn status_for(uri: &str) -> StatusCode {
        let app = Router::new().route("/items/{id}", get(echo));
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn integer_segment_is_accepted() {
        assert_eq!(status_for("/items/42").await, StatusCode::OK);
        assert_eq!(status_for("/items/-3").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn non_integer_segment_is_not_found() {
        assert_eq!(status_for("/items/abc").await, StatusCode::NOT_FOUND);
        assert_eq!(status_for("/items/1.5").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn overflowing_segment_is_not_found() {
        assert_eq!(status_for("/items/2147483648").await, StatusCode::NOT_FOUND);
    }
}
