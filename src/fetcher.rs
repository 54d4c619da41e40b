use anyhow::{bail, Context, Result};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::path::Path;
use url::Url;

/// A successfully downloaded resource.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// The URL variant that actually succeeded; asset filenames are
    /// derived from this exact string.
    pub final_url: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        // Redirects are followed by reqwest's default policy
        let client = ClientBuilder::new()
            .use_rustls_tls()
            .user_agent(user_agent)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Try the URL as given first; if it ends with a trailing `&`, also try
    /// it with that character stripped. First success wins.
    pub async fn fetch_with_variants(&self, url: &str) -> Result<FetchedResource> {
        let mut variants = vec![url.to_string()];
        if let Some(stripped) = url.strip_suffix('&') {
            variants.push(stripped.to_string());
        }

        let mut last_err = None;
        for variant in variants {
            match self.fetch(&variant).await {
                Ok(resource) => return Ok(resource),
                Err(e) => {
                    eprintln!("⚠️  Failed with variant {}: {}, trying next...", variant, e);
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("no URL variants to try")))
    }

    /// Single GET. Success means the transport completed and the status is
    /// exactly 200; anything else is an error for this variant.
    pub async fn fetch(&self, url: &str) -> Result<FetchedResource> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request failed for {}", url))?;

        if response.status() != StatusCode::OK {
            bail!("bad status: {}", response.status());
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        // Read the whole body before anything touches disk, so a failed
        // fetch never leaves a partial asset file behind
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("failed to read response body for {}", url))?;

        Ok(FetchedResource {
            final_url: url.to_string(),
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}

/// Pick a file extension for a fetched resource: the extension of the URL's
/// path component wins; without one, fall back to the declared content type.
pub fn infer_extension(url: &str, content_type: Option<&str>) -> String {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(ext) = Path::new(parsed.path()).extension().and_then(|e| e.to_str()) {
            return format!(".{}", ext);
        }
    }

    extension_from_content_type(content_type.unwrap_or("")).to_string()
}

fn extension_from_content_type(content_type: &str) -> &'static str {
    if content_type.contains("image/jpeg") {
        ".jpg"
    } else if content_type.contains("image/png") {
        ".png"
    } else if content_type.contains("image/gif") {
        ".gif"
    } else if content_type.contains("image/webp") {
        ".webp"
    } else if content_type.contains("video/mp4") {
        ".mp4"
    } else if content_type.contains("video/quicktime") {
        ".mov"
    } else if content_type.contains("audio/mpeg") {
        ".mp3"
    } else {
        ".bin"
    }
}
