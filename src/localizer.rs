use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

use crate::extractor::UrlExtractor;
use crate::fetcher::{infer_extension, Fetcher};
use crate::normalizer::variants;
use crate::rewriter::Replacements;
use crate::store::AssetStore;

/// Counters for one end-to-end pass, reported at the end of the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalizeSummary {
    pub candidates: usize,
    pub downloaded: usize,
    pub failed: usize,
    pub replacements: usize,
}

/// Ties the components together: scans a document for CDN URLs, downloads
/// each one once into the asset store and rewrites every textual variant
/// of the URL to the local path.
pub struct CdnLocalizer {
    extractor: UrlExtractor,
    fetcher: Fetcher,
    store: AssetStore,
}

impl CdnLocalizer {
    pub fn new(
        host_prefix: &str,
        asset_dir: &Path,
        user_agent: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        let extractor = UrlExtractor::new(host_prefix);
        let fetcher = Fetcher::new(user_agent, timeout_secs)?;
        let store = AssetStore::new(asset_dir)?;

        Ok(Self {
            extractor,
            fetcher,
            store,
        })
    }

    /// Rewrite the file in place. The file is read once up front and
    /// written once at the very end, so a failure mid-run never damages
    /// the original document.
    pub async fn localize_file(&self, html_file: &Path) -> Result<LocalizeSummary> {
        let content = fs::read_to_string(html_file)
            .with_context(|| format!("Error reading file: {:?}", html_file))?;

        let (rewritten, summary) = self.localize(&content).await;

        fs::write(html_file, rewritten)
            .with_context(|| format!("Error writing updated file: {:?}", html_file))?;

        println!(
            "📊 {} candidates, {} downloaded, {} failed, {} strings replaced",
            summary.candidates, summary.downloaded, summary.failed, summary.replacements
        );

        Ok(summary)
    }

    /// Core pass over an in-memory document. Per-resource failures are
    /// logged and skipped; this step itself never fails.
    pub async fn localize(&self, content: &str) -> (String, LocalizeSummary) {
        let matches = self.extractor.extract(content);
        let mut replacements = Replacements::new();
        let mut summary = LocalizeSummary {
            candidates: matches.len(),
            ..Default::default()
        };

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap(),
        );

        for raw in &matches {
            // Skip if already processed
            if replacements.contains(raw) {
                continue;
            }

            let urls = variants(raw);
            progress_bar.set_message(format!("Downloading: {}", urls.decoded));
            println!("📥 Downloading: {}", urls.decoded.blue());

            let resource = match self.fetcher.fetch_with_variants(&urls.decoded).await {
                Ok(resource) => resource,
                Err(e) => {
                    eprintln!("❌ Error downloading {}: {}", urls.decoded, e);
                    summary.failed += 1;
                    continue;
                }
            };

            let extension = infer_extension(&resource.final_url, resource.content_type.as_deref());
            let local_path = match self
                .store
                .store(&resource.final_url, &extension, &resource.bytes)
            {
                Ok(path) => path,
                Err(e) => {
                    eprintln!("❌ Error saving {}: {}", urls.decoded, e);
                    summary.failed += 1;
                    continue;
                }
            };

            // Every distinct spelling of this URL maps to the same asset
            replacements.insert(&urls.raw, &local_path);
            if urls.cleaned != urls.raw {
                replacements.insert(&urls.cleaned, &local_path);
            }
            if urls.decoded != urls.cleaned {
                replacements.insert(&urls.decoded, &local_path);
            }

            summary.downloaded += 1;
            println!("💾 Will replace with local file: {}", local_path.green());
        }

        progress_bar.finish_and_clear();

        let rewritten = replacements.apply(content);
        for (literal, local_path) in replacements.ordered_pairs() {
            println!("🔁 Replaced URL: {} -> {}", literal, local_path);
        }
        summary.replacements = replacements.len();

        (rewritten, summary)
    }
}
