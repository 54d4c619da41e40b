pub mod cli;
pub mod extractor;
pub mod fetcher;
pub mod localizer;
pub mod normalizer;
pub mod rewriter;
pub mod store;

// Re-export main types for convenience
pub use cli::LocalizeCommand;
pub use extractor::{trim_to_complete_url, UrlExtractor};
pub use fetcher::{infer_extension, FetchedResource, Fetcher};
pub use localizer::{CdnLocalizer, LocalizeSummary};
pub use normalizer::{variants, UrlVariants};
pub use rewriter::Replacements;
pub use store::AssetStore;
