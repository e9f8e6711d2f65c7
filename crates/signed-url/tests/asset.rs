use signed_url::TokenedAssetClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_signed_url_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asset42"))
        .and(header("Authorization", "Bearer tok123"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("https://storage.example.com/a42?sig=x"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = TokenedAssetClient::new(server.uri(), "tok123");
    let url = client.get_signed_url("asset42").await.unwrap();
    assert_eq!(url.as_str(), "https://storage.example.com/a42?sig=x");
}

#[tokio::test]
async fn test_get_signed_url_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asset42"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = TokenedAssetClient::new(server.uri(), "bad");
    let err = client.get_signed_url("asset42").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.status_text(), Some("Unauthorized"));
}

#[tokio::test]
async fn test_file_exists_heads_the_given_url_only() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/storage/a42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = TokenedAssetClient::new(server.uri(), "tok123");
    let signed = format!("{}/storage/a42", server.uri());
    assert!(client.file_exists(&signed).await);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "HEAD");
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_file_exists_false_on_missing_or_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = TokenedAssetClient::new(server.uri(), "tok123");
    assert!(!client.file_exists(format!("{}/gone", server.uri())).await);
    assert!(!client.file_exists("http://127.0.0.1:1/gone").await);
    assert!(!client.file_exists("not a url").await);
}

#[tokio::test]
async fn test_download_file_uses_its_own_asset_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asset42"))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(format!("{}/storage/a42", server.uri())),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/storage/a42"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"glTF\x02\x00\x00\x00".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let client = TokenedAssetClient::new(server.uri(), "tok123");
    let data = client.download_file("asset42").await.unwrap();
    assert_eq!(data, b"glTF\x02\x00\x00\x00");
}

#[tokio::test]
async fn test_download_file_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/locked"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(format!("{}/storage/locked", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/storage/locked"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = TokenedAssetClient::new(server.uri(), "tok123");

    let err = client.download_file("missing").await.unwrap_err();
    assert_eq!(err, client.get_signed_url("missing").await.unwrap_err());
    assert_eq!(err.status_text(), Some("Not Found"));

    let err = client.download_file("locked").await.unwrap_err();
    assert_eq!(err.status_text(), Some("Forbidden"));
    assert!(err.url().ends_with("/storage/locked"));
}
