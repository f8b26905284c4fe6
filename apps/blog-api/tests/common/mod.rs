//! Shared fixtures for the HTTP tests.
//!
//! Every test builds its own application over a fresh store, so no state
//! leaks between tests.

#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

pub use blog_api::build_app;
pub use blog_api::state::AppState;

/// A single complete post body.
pub fn sample_post() -> Value {
    json!({
        "title": "Meu Primeiro Post",
        "content": "Este é o conteúdo do meu primeiro post",
        "author": "João Silva"
    })
}

/// Three posts with distinct titles and authors.
pub fn multiple_posts() -> Vec<Value> {
    vec![
        json!({ "title": "Python Basics", "content": "Introdução ao Python", "author": "Maria" }),
        json!({ "title": "Flask Tutorial", "content": "Aprenda Flask do zero", "author": "Carlos" }),
        json!({ "title": "REST APIs", "content": "Como criar APIs RESTful", "author": "Ana" }),
    ]
}

/// POST a post and return the created body, asserting a 201.
pub async fn create_post<S, B>(app: &S, body: &Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED, "creating {body}");
    test::read_body_json(resp).await
}

/// Create every post in `bodies`, returning their ids in order.
pub async fn populate<S, B>(app: &S, bodies: &[Value]) -> Vec<u64>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let mut ids = Vec::with_capacity(bodies.len());
    for body in bodies {
        let created = create_post(app, body).await;
        ids.push(created["id"].as_u64().expect("created post has an id"));
    }
    ids
}

/// Send a request and return status plus JSON body.
pub async fn send<S, B>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body is JSON")
    };
    (status, value)
}

pub async fn get<S, B>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    send(app, test::TestRequest::get().uri(uri).to_request()).await
}

pub async fn put<S, B>(app: &S, uri: &str, body: &Value) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    send(app, test::TestRequest::put().uri(uri).set_json(body).to_request()).await
}

pub async fn delete<S, B>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    send(app, test::TestRequest::delete().uri(uri).to_request()).await
}

/// Number of posts currently listed.
pub async fn post_count<S, B>(app: &S) -> usize
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = get(app, "/api/posts").await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().map(Vec::len).unwrap_or_default()
}
