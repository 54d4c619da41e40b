use cdn_localize::{infer_extension, Fetcher};

/// The URL path extension always wins over the declared content type
#[test]
fn test_extension_from_url_path() {
    let test_cases = vec![
        ("https://cdn.discordapp.com/a/b/pic.png?ex=1&hm=2", ".png"),
        ("https://cdn.discordapp.com/a/photo.jpg", ".jpg"),
        ("https://cdn.discordapp.com/a/clip.mp4", ".mp4"),
        ("https://cdn.discordapp.com/a/anim.gif#frame", ".gif"),
    ];

    for (url, expected) in test_cases {
        let ext = infer_extension(url, Some("application/octet-stream"));
        assert_eq!(ext, expected, "Failed for URL: {}", url);
    }
}

/// Without a path extension, fall back to the declared content type
#[test]
fn test_extension_from_content_type() {
    let url = "https://cdn.discordapp.com/attachments/1/2/3";

    let test_cases = vec![
        (Some("image/jpeg"), ".jpg"),
        (Some("image/png"), ".png"),
        (Some("image/gif"), ".gif"),
        (Some("image/webp"), ".webp"),
        (Some("video/mp4"), ".mp4"),
        (Some("video/quicktime"), ".mov"),
        (Some("audio/mpeg"), ".mp3"),
        (Some("image/webp; charset=binary"), ".webp"),
    ];

    for (content_type, expected) in test_cases {
        let ext = infer_extension(url, content_type);
        assert_eq!(ext, expected, "Failed for content type: {:?}", content_type);
    }
}

#[test]
fn test_extension_unknown_content_type_falls_back_to_bin() {
    let url = "https://cdn.discordapp.com/attachments/1/2/3";
    assert_eq!(infer_extension(url, Some("application/x-mystery")), ".bin");
    assert_eq!(infer_extension(url, None), ".bin");
}

#[tokio::test]
async fn test_fetch_rejects_non_success_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/missing.png")
        .with_status(404)
        .create_async()
        .await;

    let fetcher = Fetcher::new("test-agent/1.0", 5).unwrap();
    let result = fetcher.fetch(&format!("{}/missing.png", server.url())).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("bad status"));
}

/// The unmodified URL is tried first; the trailing-ampersand-stripped
/// variant is only used after it fails
#[tokio::test]
async fn test_fetch_retries_without_trailing_ampersand() {
    let mut server = mockito::Server::new_async().await;
    // Only the stripped query matches; the raw "x=1&" variant gets an
    // implicit 501 from the mock server and must be retried
    let mock = server
        .mock("GET", "/pic")
        .match_query(mockito::Matcher::Exact("x=1".to_string()))
        .with_status(200)
        .with_header("content-type", "image/webp")
        .with_body(b"webp-bytes".to_vec())
        .create_async()
        .await;

    let fetcher = Fetcher::new("test-agent/1.0", 5).unwrap();
    let url = format!("{}/pic?x=1&", server.url());
    let resource = fetcher.fetch_with_variants(&url).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resource.final_url, format!("{}/pic?x=1", server.url()));
    assert_eq!(resource.bytes, b"webp-bytes");
    assert_eq!(
        infer_extension(&resource.final_url, resource.content_type.as_deref()),
        ".webp"
    );
}

#[tokio::test]
async fn test_fetch_with_variants_reports_last_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/pic")
        .match_query(mockito::Matcher::Any)
        .with_status(403)
        .expect(2)
        .create_async()
        .await;

    let fetcher = Fetcher::new("test-agent/1.0", 5).unwrap();
    let url = format!("{}/pic?x=1&", server.url());
    let result = fetcher.fetch_with_variants(&url).await;

    assert!(result.is_err(), "all variants failed, fetch must fail");
}
