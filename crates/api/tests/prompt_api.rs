//! HTTP-level integration tests for prompt CRUD, draft edits, and tag sets.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_prompt, delete, edit_prompt, get, patch_json, post_json,
    prompt_detail, put_json,
};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Create / detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_prompt_with_defaults_and_first_version(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/prompts",
        json!({
            "name": "  Article Summarizer ",
            "description": "Summaries for the newsletter",
            "tags": ["Writing", " Writing", "", "Research"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let item = body_json(response).await["data"].clone();
    assert_eq!(item["name"], "Article Summarizer");
    assert_eq!(item["description"], "Summaries for the newsletter");
    assert_eq!(item["tags"], json!(["Writing", "Research"]));

    let detail = prompt_detail(&pool, item["id"].as_str().unwrap()).await;
    assert_eq!(detail["current_content"], "You are a helpful assistant.");
    assert_eq!(detail["current_temperature"], 0.7);
    assert_eq!(detail["current_token_limit"], 2000);
    assert_eq!(detail["current_mode"], "api");
    assert!(detail["current_model_id"].is_null());

    let versions = detail["versions"].as_array().unwrap();
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0]["version_number"], 1);
    assert_eq!(versions[0]["label"], "v1");
    assert_eq!(versions[0]["is_major_version"], true);
    assert_eq!(versions[0]["content"], "You are a helpful assistant.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_prompt_uses_configured_default_model(pool: SqlitePool) {
    promptvault_db::seed::seed_defaults(&pool).await.unwrap();

    let id = create_prompt(&pool, "With default").await;
    let detail = prompt_detail(&pool, &id).await;
    assert_eq!(detail["current_model_id"], "gpt-4o");
    assert_eq!(detail["versions"][0]["model_id"], "gpt-4o");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_prompt_with_explicit_model(pool: SqlitePool) {
    promptvault_db::seed::seed_defaults(&pool).await.unwrap();

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/prompts",
        json!({ "name": "Claude prompt", "model_id": "claude-3-sonnet" }),
    )
    .await;
    let id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let detail = prompt_detail(&pool, &id).await;
    assert_eq!(detail["current_model_id"], "claude-3-sonnet");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_prompt_with_unknown_model_404(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/prompts",
        json!({ "name": "Bad model", "model_id": "no-such-model" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_prompt_blank_name_rejected(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/prompts", json!({ "name": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_prompts_includes_tags(pool: SqlitePool) {
    let a = create_prompt(&pool, "First").await;
    create_prompt(&pool, "Second").await;

    let app = build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/prompts/{a}/tags"),
        json!({ "tag_names": ["Coding"] }),
    )
    .await;

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/prompts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    let items = data.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "First");
    assert_eq!(items[0]["tags"], json!(["Coding"]));
    assert_eq!(items[1]["tags"], json!([]));
    assert!(items[0]["last_modified"].is_string());
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draft_edit_does_not_bump_updated_at(pool: SqlitePool) {
    let id = create_prompt(&pool, "Quiet edits").await;
    let before = prompt_detail(&pool, &id).await;

    let prompt = edit_prompt(
        &pool,
        &id,
        json!([
            { "field": "content", "value": "Summarize concisely." },
            { "field": "temperature", "value": 0.2 },
            { "field": "top_k", "value": 40 },
        ]),
    )
    .await;

    assert_eq!(prompt["current_content"], "Summarize concisely.");
    assert_eq!(prompt["current_temperature"], 0.2);
    assert_eq!(prompt["current_top_k"], 40);
    assert_eq!(prompt["updated_at"], before["updated_at"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_metadata_edit_bumps_updated_at(pool: SqlitePool) {
    let id = create_prompt(&pool, "Loud edits").await;
    let before = prompt_detail(&pool, &id).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let prompt = edit_prompt(
        &pool,
        &id,
        json!([
            { "field": "name", "value": "Renamed" },
            { "field": "favorite", "value": true },
        ]),
    )
    .await;

    assert_eq!(prompt["name"], "Renamed");
    assert_eq!(prompt["is_favorite"], true);
    assert_ne!(prompt["updated_at"], before["updated_at"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_is_trimmed_like_create(pool: SqlitePool) {
    let id = create_prompt(&pool, "  Padded  ").await;
    assert_eq!(prompt_detail(&pool, &id).await["name"], "Padded");

    let prompt = edit_prompt(
        &pool,
        &id,
        json!([
            { "field": "name", "value": "  Renamed  " },
            { "field": "description", "value": "   " },
        ]),
    )
    .await;
    assert_eq!(prompt["name"], "Renamed");
    assert!(prompt["description"].is_null());

    let app = build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/prompts/{id}"),
        json!({ "updates": [{ "field": "name", "value": "   " }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_edit_writes_nothing(pool: SqlitePool) {
    let id = create_prompt(&pool, "Atomic").await;

    let app = build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/v1/prompts/{id}"),
        json!({ "updates": [
            { "field": "content", "value": "changed" },
            { "field": "temperature", "value": 5.0 },
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let detail = prompt_detail(&pool, &id).await;
    assert_eq!(detail["current_content"], "You are a helpful assistant.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_update_field_rejected(pool: SqlitePool) {
    let id = create_prompt(&pool, "Strict").await;
    let app = build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/prompts/{id}"),
        json!({ "updates": [{ "field": "created_at", "value": "2020-01-01" }] }),
    )
    .await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tag_set_is_replaced_not_merged(pool: SqlitePool) {
    let id = create_prompt(&pool, "Tagged").await;
    let other = create_prompt(&pool, "Also tagged").await;

    for (prompt, names) in [(&id, json!(["A", "B"])), (&other, json!(["A"]))] {
        let app = build_test_app(pool.clone());
        let response = put_json(
            app,
            &format!("/api/v1/prompts/{prompt}/tags"),
            json!({ "tag_names": names }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/prompts/{id}/tags"),
        json!({ "tag_names": ["B", "C"] }),
    )
    .await;
    assert_eq!(body_json(response).await["data"], json!(["B", "C"]));

    let detail = prompt_detail(&pool, &id).await;
    assert_eq!(detail["tags"], json!(["B", "C"]));

    // Tag A is still registered and still applied to the other prompt.
    let app = build_test_app(pool.clone());
    let tags = body_json(get(app, "/api/v1/tags").await).await["data"].clone();
    assert!(tags.as_array().unwrap().iter().any(|t| t["name"] == "A"));
    assert_eq!(prompt_detail(&pool, &other).await["tags"], json!(["A"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tags_for_missing_prompt_404(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/prompts/missing/tags",
        json!({ "tag_names": ["A"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_prompt_cascades(pool: SqlitePool) {
    let id = create_prompt(&pool, "Doomed").await;
    let version_id = prompt_detail(&pool, &id).await["versions"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let app = build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/versions/{version_id}/samples"),
        json!({ "name": "out", "content": "text" }),
    )
    .await;

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/prompts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/prompts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/versions/{version_id}/samples")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let (samples,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM output_samples")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(samples, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_prompt_404(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = delete(app, "/api/v1/prompts/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
