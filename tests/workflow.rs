mod support;

use httpmock::MockServer;
use postdesk::application::compose::{ComposeForm, ComposeOutcome};
use postdesk::application::gateway::{ListQuery, ListScope, PostsGateway};
use postdesk::application::listing::{LoadStatus, ListView};
use postdesk::infra::http::ApiClient;
use postdesk::presentation::cards::render_list;
use support::FakeApi;
use url::Url;

fn client(api: &FakeApi) -> ApiClient {
    ApiClient::new(&api.url(), None).expect("client")
}

async fn view(api: &FakeApi, scope: ListScope) -> ListView<ApiClient> {
    let mut view = ListView::new(client(api), scope, ListQuery::first_page(10));
    view.load().await;
    view
}

fn ids<G: PostsGateway>(view: &ListView<G>) -> Vec<String> {
    view.state().posts.iter().map(|p| p.id.clone()).collect()
}

#[tokio::test]
async fn publish_now_lands_in_published_list_only() {
    let api = FakeApi::spawn().await;

    let outcome = ComposeForm::new("Launch", "We are live")
        .publish_now(&client(&api))
        .await;
    let post = match outcome {
        ComposeOutcome::Completed { post: Some(post), .. } => post,
        other => panic!("publish failed: {other:?}"),
    };

    let published = view(&api, ListScope::Published).await;
    let drafts = view(&api, ListScope::Drafts).await;
    assert_eq!(ids(&published), [post.id.clone()]);
    assert!(ids(&drafts).is_empty());
}

#[tokio::test]
async fn saved_draft_moves_to_published_after_publish() {
    let api = FakeApi::spawn().await;
    let outcome = ComposeForm::new("Notes", "first pass")
        .save(&client(&api))
        .await;
    let draft = match outcome {
        ComposeOutcome::Completed { post: Some(draft), .. } => draft,
        other => panic!("save failed: {other:?}"),
    };

    let mut drafts = view(&api, ListScope::Drafts).await;
    assert_eq!(ids(&drafts), [draft.id.clone()]);

    drafts.publish(&draft.id).await.expect("publish");
    assert!(ids(&drafts).is_empty());

    let published = view(&api, ListScope::Published).await;
    assert_eq!(ids(&published), [draft.id.clone()]);
}

#[tokio::test]
async fn edit_keeps_identity_and_publication_state() {
    let api = FakeApi::spawn().await;
    let seeded = api.seed("Old title", "Body", true).await;

    let mut published = view(&api, ListScope::Published).await;
    let mut session = published.begin_edit(&seeded.id).await.expect("open");
    session.title = "New title".into();
    published.commit_edit(&session).await.expect("save");

    let stored = api.find(&seeded.id).await.expect("still there");
    assert_eq!(stored.title, "New title");
    assert_eq!(stored.content, "Body");
    assert_eq!(stored.created_at, seeded.created_at);
    assert!(stored.published);
    assert_eq!(published.state().posts[0].title, "New title");
}

#[tokio::test]
async fn deleted_draft_is_gone_everywhere() {
    let api = FakeApi::spawn().await;
    let keep = api.seed("Keep", "a", false).await;
    let gone = api.seed("Gone", "b", false).await;

    let mut drafts = view(&api, ListScope::Drafts).await;
    drafts.delete(&gone.id).await.expect("delete");

    assert_eq!(ids(&drafts), [keep.id.clone()]);
    let err = client(&api).get_post(&gone.id).await.expect_err("deleted");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn search_and_paging_reach_the_server() {
    let api = FakeApi::spawn().await;
    for n in 0..3 {
        api.seed(&format!("rust {n}"), "x", true).await;
    }
    api.seed("golang", "x", true).await;

    let mut published = ListView::new(client(&api), ListScope::Published, ListQuery::first_page(2));
    published.search(Some("RUST".into())).await;
    assert_eq!(published.state().posts.len(), 2);

    published.goto_page(2).await;
    assert_eq!(published.state().posts.len(), 1);
    assert_eq!(published.query().term(), Some("RUST"));
}

#[tokio::test]
async fn malformed_list_renders_failure_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/posts/draft");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":[]}"#);
    });
    let base = Url::parse(&server.base_url()).expect("url");

    let mut drafts = ListView::new(
        ApiClient::new(&base, None).expect("client"),
        ListScope::Drafts,
        ListQuery::first_page(10),
    );
    drafts.load().await;

    assert_eq!(drafts.state().status, LoadStatus::Malformed);
    assert!(drafts.state().posts.is_empty());
    let rendered = render_list(drafts.state(), ListScope::Drafts, &chrono::Utc).expect("render");
    assert_eq!(rendered, "Failed to load posts.");
}
