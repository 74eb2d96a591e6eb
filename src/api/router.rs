use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::cms;
use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::types::ApiError;

pub const ROUTE_NOT_FOUND: &str = "Not found";

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_check))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/cms", cms::create_cms_router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

async fn route_not_found() -> ApiError {
    ApiError::not_found(ROUTE_NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::api::state::ContentServiceTrait;
    use crate::infrastructure::auth::{AuthClaims, JwtService};
    use crate::infrastructure::content::{ContentService, InMemoryContentRepository};

    const SECRET: &str = "router-test-secret";

    fn app() -> Router {
        let service: Arc<dyn ContentServiceTrait> =
            Arc::new(ContentService::new(Arc::new(InMemoryContentRepository::new())));
        let state = AppState::new(service, Arc::new(JwtService::new(SECRET)), "admin");

        create_router(state)
    }

    fn token(id: Option<i64>, role: Option<&str>) -> String {
        let claims = AuthClaims {
            id,
            role: role.map(str::to_string),
            iat: None,
            exp: None,
        };
        format!("Bearer {}", JwtService::new(SECRET).sign(&claims).unwrap())
    }

    fn admin_token() -> String {
        token(Some(1), Some("admin"))
    }

    fn request(method: Method, uri: &str) -> axum::http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    fn json_request(
        method: Method,
        uri: &str,
        auth: Option<&str>,
        language: Option<&str>,
        body: Value,
    ) -> Request<Body> {
        let mut builder = request(method, uri).header(header::CONTENT_TYPE, "application/json");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        if let Some(language) = language {
            builder = builder.header("language", language);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    async fn create(app: &Router, content_type: &str, language: &str, data: &str) -> StatusCode {
        let (status, _) = send(
            app,
            json_request(
                Method::POST,
                "/cms",
                Some(&admin_token()),
                Some(language),
                json!({"contentType": content_type, "contentData": data}),
            ),
        )
        .await;
        status
    }

    #[tokio::test]
    async fn test_root_is_healthy_text() {
        let response = app()
            .oneshot(request(Method::GET, "/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"healthy");
    }

    #[tokio::test]
    async fn test_ready_with_memory_store() {
        let (status, body) = send(
            &app(),
            request(Method::GET, "/ready").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_create_then_get_normalized() {
        let app = app();

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/cms",
                Some(&admin_token()),
                Some("EN"),
                json!({"contentType": "AboutUs", "contentData": "<div>About</div>"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Content created successfully");
        assert_eq!(body["status"], 201);
        assert_eq!(body["data"], json!({}));

        let (status, body) = send(
            &app,
            request(Method::GET, "/cms/aboutus")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Cms data fetched successfully");
        assert_eq!(
            body["data"],
            json!({"contentType": "aboutus", "contentData": "<div>About</div>", "language": "en"})
        );
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let app = app();

        assert_eq!(create(&app, "faq", "en", "one").await, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/cms",
                Some(&admin_token()),
                Some("EN"),
                json!({"contentType": "FAQ", "contentData": "two"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Content already exist");
        assert_eq!(body["status"], 409);
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let app = app();
        for i in 0..15 {
            create(&app, &format!("type{:02}", i), "en", "x").await;
        }

        let (status, body) = send(
            &app,
            request(Method::GET, "/cms").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Contents fetched successfully");
        assert_eq!(body["data"].as_array().unwrap().len(), 10);
        assert_eq!(body["data"][0]["contentType"], "type00");

        let (_, body) = send(
            &app,
            request(Method::GET, "/cms?page=2&limit=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(body["data"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"][0]["contentType"], "type10");
    }

    #[tokio::test]
    async fn test_list_language_filter() {
        let app = app();
        create(&app, "aboutus", "en", "en").await;
        create(&app, "aboutus", "fr", "fr").await;

        let (_, body) = send(
            &app,
            request(Method::GET, "/cms?language=FR")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["language"], "fr");
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_query() {
        let app = app();

        for uri in ["/cms?page=0", "/cms?page=abc", "/cms?unknown=1", "/cms?language=english"] {
            let (status, body) =
                send(&app, request(Method::GET, uri).body(Body::empty()).unwrap()).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
            assert_eq!(body["status"], 400);
        }
    }

    #[tokio::test]
    async fn test_content_types() {
        let app = app();
        create(&app, "aboutus", "en", "x").await;
        create(&app, "terms", "fr", "y").await;

        let (status, body) = send(
            &app,
            request(Method::GET, "/cms/content-types")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Content types fetched successfully");
        assert_eq!(
            body["data"],
            json!([
                {"contentType": "aboutus", "language": "en"},
                {"contentType": "terms", "language": "fr"}
            ])
        );
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (status, body) = send(
            &app(),
            request(Method::GET, "/cms/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Cms data not found");
        assert_eq!(body["data"], json!({}));
    }

    #[tokio::test]
    async fn test_update_and_delete_flow() {
        let app = app();
        create(&app, "privacy", "en", "old").await;

        let (status, body) = send(
            &app,
            json_request(
                Method::PUT,
                "/cms/Privacy",
                Some(&admin_token()),
                None,
                json!({"contentData": "new"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Content updated successfully");

        let (_, body) = send(
            &app,
            request(Method::GET, "/cms/privacy")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(body["data"]["contentData"], "new");

        let delete = request(Method::DELETE, "/cms/privacy")
            .header(header::AUTHORIZATION, admin_token())
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, delete).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Content deleted successfully");

        let (status, _) = send(
            &app,
            request(Method::GET, "/cms/privacy")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (status, body) = send(
            &app(),
            json_request(
                Method::PUT,
                "/cms/missing",
                Some(&admin_token()),
                None,
                json!({"contentData": "x"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Cms data not found");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let delete = request(Method::DELETE, "/cms/missing")
            .header(header::AUTHORIZATION, admin_token())
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(&app(), delete).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mutations_require_authorization() {
        let app = app();
        let body = json!({"contentType": "faq", "contentData": "x"});

        let (status, response) =
            send(&app, json_request(Method::POST, "/cms", None, None, body.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(response["message"], "Header authorization not passed");

        let (status, _) = send(
            &app,
            json_request(Method::PUT, "/cms/faq", None, None, json!({"contentData": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            request(Method::DELETE, "/cms/faq").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_and_incomplete_tokens() {
        let app = app();
        let body = json!({"contentType": "faq", "contentData": "x"});

        let (status, response) = send(
            &app,
            json_request(Method::POST, "/cms", Some("Bearer not-a-jwt"), None, body.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(response["message"], "Invalid token");

        let (status, response) = send(
            &app,
            json_request(
                Method::POST,
                "/cms",
                Some(&token(Some(1), None)),
                None,
                body.clone(),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(response["message"], "Token does not contain id or role of user");

        let (status, response) = send(
            &app,
            json_request(
                Method::POST,
                "/cms",
                Some(&token(Some(0), Some("admin"))),
                None,
                body.clone(),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(response["message"], "Token does not contain id or role of user");
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden() {
        let app = app();
        assert_eq!(create(&app, "faq", "en", "x").await, StatusCode::CREATED);

        let editor = token(Some(2), Some("editor"));
        let requests = [
            json_request(
                Method::POST,
                "/cms",
                Some(&editor),
                None,
                json!({"contentType": "terms", "contentData": "x"}),
            ),
            json_request(
                Method::PUT,
                "/cms/faq",
                Some(&editor),
                None,
                json!({"contentData": "y"}),
            ),
            request(Method::DELETE, "/cms/faq")
                .header(header::AUTHORIZATION, &editor)
                .body(Body::empty())
                .unwrap(),
        ];

        for request in requests {
            let method = request.method().clone();
            let (status, body) = send(&app, request).await;

            assert_eq!(status, StatusCode::FORBIDDEN, "method: {method}");
            assert_eq!(body["message"], "Invalid User");
            assert_eq!(body["status"], 403);
        }
    }

    #[tokio::test]
    async fn test_unsupported_method_uses_not_found_envelope() {
        let app = app();
        assert_eq!(create(&app, "aboutus", "en", "x").await, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            request(Method::PATCH, "/cms/aboutus")
                .header(header::AUTHORIZATION, admin_token())
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Not found");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_create_validation_errors() {
        let app = app();

        let (status, body) = send(
            &app,
            json_request(
                Method::POST,
                "/cms",
                Some(&admin_token()),
                None,
                json!({"contentType": ""}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "contentData is required. contentType is not allowed to be empty"
        );

        let (status, _) = send(
            &app,
            json_request(
                Method::POST,
                "/cms",
                Some(&admin_token()),
                None,
                json!({"contentType": "faq", "contentData": "x", "extra": true}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = request(Method::POST, "/cms")
            .header(header::AUTHORIZATION, admin_token())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_long_language_header_is_bad_request() {
        let request = request(Method::GET, "/cms/aboutus")
            .header("language", "english")
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(&app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = send(
            &app(),
            request(Method::GET, "/nope/at/all")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Not found");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_security_and_request_id_headers() {
        let response = app()
            .oneshot(request(Method::GET, "/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(response.headers().contains_key("x-request-id"));
    }
}
