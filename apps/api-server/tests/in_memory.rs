//! The posts API over the in-memory repository (no database configured).

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::json;

use api_server::{AppState, configure_app};
use blog_shared::PostResponse;

#[actix_rt::test]
async fn create_list_delete_round_trip() {
    let state = AppState::in_memory();
    let app = test::init_service(App::new().configure(configure_app(state.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "In memory",
            "author": { "firstName": "Rich", "lastName": "Hickey" },
            "content": "Simple made easy."
        }))
        .to_request();
    let created: PostResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.author, "Rich Hickey");

    let listed: Vec<PostResponse> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/posts").to_request())
            .await;
    assert_eq!(listed, vec![created.clone()]);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert_eq!(state.posts.count().await.unwrap(), 0);
}

#[actix_rt::test]
async fn update_keeps_omitted_content() {
    let state = AppState::in_memory();
    let app = test::init_service(App::new().configure(configure_app(state.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "Draft",
            "author": { "firstName": "Rob", "lastName": "Pike" },
            "content": "Clear is better than clever."
        }))
        .to_request();
    let created: PostResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", created.id))
        .set_json(json!({ "title": "Final" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let updated: PostResponse = test::read_body_json(resp).await;
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "Clear is better than clever.");
    assert_eq!(updated.created, created.created);
    assert_eq!(updated.id, created.id);
}
