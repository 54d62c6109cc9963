use reelix::modules::catalog::infrastructure::builtin::fallback_movies;
use reelix::TmdbClient;

const TEST_API_KEY: &str = "test-api-key";

/// Nothing listens here, so every request fails at the transport layer.
fn dead_client() -> TmdbClient {
    TmdbClient::with_base_url(TEST_API_KEY, "http://127.0.0.1:9").expect("client builds")
}

#[tokio::test]
async fn trending_falls_back_on_transport_failure() {
    let client = dead_client();
    assert_eq!(client.trending().await, fallback_movies());
}

#[tokio::test]
async fn popular_falls_back_on_transport_failure() {
    let client = dead_client();
    assert_eq!(client.popular().await, fallback_movies());
}

#[tokio::test]
async fn top_rated_falls_back_on_transport_failure() {
    let client = dead_client();
    assert_eq!(client.top_rated().await, fallback_movies());
}

#[tokio::test]
async fn search_returns_empty_on_transport_failure() {
    let client = dead_client();
    assert!(client.search("irishman").await.is_empty());
}

#[tokio::test]
async fn blank_searches_return_empty_without_a_request() {
    // Even against a dead endpoint these return instantly: the query is
    // rejected before any request is issued.
    let client = dead_client();
    assert!(client.search("").await.is_empty());
    assert!(client.search("   ").await.is_empty());
}

#[tokio::test]
async fn detail_returns_none_on_transport_failure() {
    let client = dead_client();
    assert!(client.detail(1).await.is_none());
}
