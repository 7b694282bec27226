use crate::domain::{Page, Post};
use crate::tests::mocks::MockFetcher;
use crate::views::{Home, PageList, PostList, ViewState};
use serde_json::json;

fn about_page() -> serde_json::Value {
    json!({"id": 1, "title": "About", "content": "<p>Hi</p>", "created_at": "2024-01-01"})
}

#[test]
fn test_view_starts_loading_with_no_records() {
    let view = PageList::new();

    assert_eq!(*view.state(), ViewState::Loading);
    assert!(view.records().is_empty());
    assert_eq!(view.endpoint(), "/api/pages");
    assert_eq!(PostList::new().endpoint(), "/api/posts");
}

#[tokio::test]
async fn test_mount_loads_records_from_endpoint() {
    let fetcher = MockFetcher::new();
    fetcher.respond("/api/pages", json!([about_page()]));
    let mut view = PageList::new();

    view.mount(&fetcher).await;

    assert_eq!(fetcher.calls_to("/api/pages"), 1);
    assert_eq!(view.records().len(), 1);
    assert_eq!(view.records()[0].title, "About");
}

// a view fetches once per mount, a second mount is a no-op even if the data changed
#[tokio::test]
async fn test_mount_fetches_exactly_once() {
    let fetcher = MockFetcher::new();
    fetcher.respond("/api/pages", json!([about_page()]));
    let mut view = PageList::new();

    view.mount(&fetcher).await;
    fetcher.respond("/api/pages", json!([]));
    view.mount(&fetcher).await;

    assert_eq!(fetcher.calls_to("/api/pages"), 1);
    assert_eq!(view.records().len(), 1);
}

// network failure: no error state, the view just never leaves loading
#[tokio::test]
async fn test_failed_fetch_stays_loading() {
    let fetcher = MockFetcher::new();
    let mut view = PostList::new();

    view.mount(&fetcher).await;

    assert_eq!(*view.state(), ViewState::Loading);
    assert_eq!(
        view.render(),
        r#"<div><h1 class="text-2xl font-bold">Latest Posts</h1></div>"#
    );
}

// the 500 envelope is an object, so it is treated the same as a failed fetch
#[tokio::test]
async fn test_error_envelope_stays_loading() {
    let fetcher = MockFetcher::new();
    fetcher.respond("/api/posts", json!({"error": "Failed to fetch postsboom"}));
    let mut view = PostList::new();

    view.mount(&fetcher).await;

    assert_eq!(*view.state(), ViewState::Loading);
    assert!(view.records().is_empty());
}

#[tokio::test]
async fn test_malformed_records_stay_loading() {
    let fetcher = MockFetcher::new();
    fetcher.respond("/api/pages", json!([{"id": "not-a-number", "title": 5}]));
    let mut view = PageList::new();

    view.mount(&fetcher).await;

    assert_eq!(*view.state(), ViewState::Loading);
}

// one irregular importer row must not blank the whole list
#[tokio::test]
async fn test_irregular_row_still_renders_every_card() {
    let fetcher = MockFetcher::new();
    fetcher.respond(
        "/api/posts",
        json!([
            {"id": 1, "title": "Good", "content": "<p>ok</p>", "created_at": "2024-01-01"},
            {"id": 2, "title": null, "content": null, "created_at": 1706745600000_i64}
        ]),
    );
    let mut view = PostList::new();

    view.mount(&fetcher).await;

    assert!(matches!(view.state(), ViewState::Loaded(_)));
    let html = view.render();
    assert_eq!(html.matches("<article").count(), 2);
    assert!(html.contains(r#"<h2 class="text-xl font-semibold">Good</h2>"#));
    assert!(html.contains(r#"<h2 class="text-xl font-semibold"></h2>"#));
    assert!(html.contains(r#"<p class="text-gray-600">2/1/2024</p>"#));
    assert!(html.contains("<div></div>"));
}

#[tokio::test]
async fn test_unreadable_timestamp_renders_invalid_date() {
    let fetcher = MockFetcher::new();
    fetcher.respond(
        "/api/pages",
        json!([{"id": 9, "title": "Odd", "content": "", "created_at": null}]),
    );
    let mut view = PageList::new();

    view.mount(&fetcher).await;

    assert_eq!(view.records().len(), 1);
    assert!(view.render().contains(r#"<p class="text-gray-600">Invalid Date</p>"#));
}

#[tokio::test]
async fn test_empty_array_is_loaded_and_renders_heading_only() {
    let fetcher = MockFetcher::new();
    fetcher.respond("/api/pages", json!([]));
    let mut view = PageList::new();

    view.mount(&fetcher).await;

    assert_eq!(*view.state(), ViewState::Loaded(Vec::<Page>::new()));
    assert_eq!(
        view.render(),
        r#"<div><h1 class="text-2xl font-bold">Website Pages</h1></div>"#
    );
}

// one card titled About with the markup injected as-is
#[tokio::test]
async fn test_render_single_page_card() {
    let fetcher = MockFetcher::new();
    fetcher.respond("/api/pages", json!([about_page()]));
    let mut view = PageList::new();
    view.mount(&fetcher).await;

    let html = view.render();

    assert_eq!(html.matches("<article").count(), 1);
    assert!(html.contains(r#"<h2 class="text-xl font-semibold">About</h2>"#));
    assert!(html.contains(r#"<p class="text-gray-600">1/1/2024</p>"#));
    assert!(html.contains("<div><p>Hi</p></div>"));
}

// the title is text, the content is trusted markup
#[tokio::test]
async fn test_render_escapes_title_but_not_content() {
    let fetcher = MockFetcher::new();
    fetcher.respond(
        "/api/posts",
        json!([{
            "id": 3,
            "title": "Tips & <Tricks>",
            "content": "<script>track()</script><em>hi</em>",
            "created_at": "2024-03-01 09:30:00",
            "seo_title": null
        }]),
    );
    let mut view = PostList::new();
    view.mount(&fetcher).await;

    let html = view.render();

    assert!(html.contains("Tips &amp; &lt;Tricks&gt;"));
    assert!(html.contains("<script>track()</script><em>hi</em>"));
}

// no client-side sorting: cards follow the order the server sent
#[tokio::test]
async fn test_render_keeps_server_order() {
    let fetcher = MockFetcher::new();
    fetcher.respond(
        "/api/posts",
        json!([
            {"id": 1, "title": "First", "content": "", "created_at": "2024-01-01"},
            {"id": 2, "title": "Second", "content": "", "created_at": "2024-06-01"}
        ]),
    );
    let mut view = PostList::new();
    view.mount(&fetcher).await;

    let html = view.render();
    let first = html.find("First").unwrap();
    let second = html.find("Second").unwrap();

    assert!(first < second);
    assert_eq!(view.records().len(), 2);
    assert!(view.records().iter().all(|post: &Post| post.seo_title.is_none()));
}

#[tokio::test]
async fn test_home_mounts_both_lists_once() {
    let fetcher = MockFetcher::new();
    fetcher.respond("/api/pages", json!([about_page()]));
    fetcher.respond("/api/posts", json!([]));
    let mut home = Home::new("My Site".to_string());

    home.mount(&fetcher).await;
    home.mount(&fetcher).await;

    assert_eq!(fetcher.calls_to("/api/pages"), 1);
    assert_eq!(fetcher.calls_to("/api/posts"), 1);
    assert_eq!(home.pages().records().len(), 1);
    assert!(home.posts().records().is_empty());
}

// heading first, then posts, then pages
#[tokio::test]
async fn test_home_render_order() {
    let fetcher = MockFetcher::new();
    fetcher.respond("/api/pages", json!([about_page()]));
    fetcher.respond("/api/posts", json!([]));
    let mut home = Home::new("My <Site>".to_string());
    home.mount(&fetcher).await;

    let html = home.render();

    assert!(html.starts_with(r#"<main class="p-6"><h1 class="text-3xl font-bold">My &lt;Site&gt;</h1>"#));
    let posts = html.find("Latest Posts").unwrap();
    let pages = html.find("Website Pages").unwrap();
    assert!(posts < pages);
    assert!(html.ends_with("</main>"));

    let document = home.render_document();
    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("<title>My &lt;Site&gt;</title>"));
}

// one list failing doesn't stop the other from rendering
#[tokio::test]
async fn test_home_one_list_failing() {
    let fetcher = MockFetcher::new();
    fetcher.respond("/api/pages", json!([about_page()]));
    let mut home = Home::new("Site".to_string());

    home.mount(&fetcher).await;

    assert_eq!(*home.posts().state(), ViewState::Loading);
    assert_eq!(home.pages().records().len(), 1);
    assert!(home.render().contains("<p>Hi</p>"));
}
