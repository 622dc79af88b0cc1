use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use herodex_db::{create_pool, run_migrations, DbRuntimeSettings};
use herodex_server::{app, AppState};
use serde_json::Value;
use tower::ServiceExt;

async fn setup_app() -> (axum::Router, herodex_db::DbPool) {
    // A single pooled connection so every request sees the same in-memory
    // database.
    let pool = create_pool(
        ":memory:",
        DbRuntimeSettings {
            busy_timeout_ms: 5_000,
            pool_max_size: 1,
        },
    )
    .unwrap();
    {
        let conn = pool.get().unwrap();
        run_migrations(&conn).unwrap();
    }

    let state = AppState { pool: pool.clone() };
    (app(state), pool)
}

fn seed_power(pool: &herodex_db::DbPool, description: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute("INSERT INTO powers (description) VALUES (?1)", [description])
        .unwrap();
    conn.last_insert_rowid()
}

fn read_description(pool: &herodex_db::DbPool, id: i64) -> String {
    let conn = pool.get().unwrap();
    conn.query_row("SELECT description FROM powers WHERE id = ?1", [id], |row| {
        row.get(0)
    })
    .unwrap()
}

fn patch_request(id: i64, body: Value) -> Request<Body> {
    Request::builder()
        .uri(format!("/powers/{id}"))
        .method("PATCH")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn list_powers_returns_all() {
    let (app, pool) = setup_app().await;
    seed_power(&pool, "gives the wielder the ability to fly");
    seed_power(&pool, "gives the wielder super-human strength");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/powers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!([
            {"id": 1, "description": "gives the wielder the ability to fly"},
            {"id": 2, "description": "gives the wielder super-human strength"},
        ])
    );
}

#[tokio::test]
async fn get_power_by_id() {
    let (app, pool) = setup_app().await;
    let id = seed_power(&pool, "gives the wielder the ability to fly");

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/powers/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["description"], "gives the wielder the ability to fly");
}

#[tokio::test]
async fn get_power_missing_returns_404() {
    let (app, _pool) = setup_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/powers/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Power not found"})
    );
}

#[tokio::test]
async fn patch_power_updates_description() {
    let (app, pool) = setup_app().await;
    let id = seed_power(&pool, "gives the wielder the ability to fly");

    let response = app
        .oneshot(patch_request(
            id,
            serde_json::json!({"description": "allows the wielder to soar through the skies"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(
        json["description"],
        "allows the wielder to soar through the skies"
    );

    // A subsequent read reflects the new description
    assert_eq!(
        read_description(&pool, id),
        "allows the wielder to soar through the skies"
    );
}

#[tokio::test]
async fn patch_power_short_description_is_rejected() {
    let (app, pool) = setup_app().await;
    let id = seed_power(&pool, "gives the wielder the ability to fly");

    let response = app
        .oneshot(patch_request(id, serde_json::json!({"description": "flies"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let errors = json["errors"].as_array().unwrap();
    assert!(!errors.is_empty());

    // Store unchanged
    assert_eq!(
        read_description(&pool, id),
        "gives the wielder the ability to fly"
    );
}

#[tokio::test]
async fn patch_power_non_string_description_is_rejected() {
    let (app, pool) = setup_app().await;
    let id = seed_power(&pool, "gives the wielder the ability to fly");

    let response = app
        .oneshot(patch_request(id, serde_json::json!({"description": 12345})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(!json["errors"].as_array().unwrap().is_empty());
    assert_eq!(
        read_description(&pool, id),
        "gives the wielder the ability to fly"
    );
}

#[tokio::test]
async fn patch_power_missing_returns_404() {
    let (app, _pool) = setup_app().await;

    let response = app
        .oneshot(patch_request(
            999,
            serde_json::json!({"description": "a perfectly valid long description"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Power not found"})
    );
}

#[tokio::test]
async fn patch_power_ignores_other_fields() {
    let (app, pool) = setup_app().await;
    let id = seed_power(&pool, "gives the wielder the ability to fly");

    // No description at all, plus a field the schema does not know
    let response = app
        .oneshot(patch_request(
            id,
            serde_json::json!({"name": "Flight", "id": 42}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id, "id is not updatable");
    assert_eq!(
        read_description(&pool, id),
        "gives the wielder the ability to fly"
    );
}
