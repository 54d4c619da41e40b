use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cdn-localize",
    about = "Rewrites an HTML file so CDN-hosted media references point at local copies",
    version,
    long_about = "Scans an HTML file for CDN-hosted media URLs, downloads each referenced resource once into a local asset directory under a content-addressed filename, and rewrites every textual variant of the URL to the local path. The file is modified in place."
)]
pub struct LocalizeCommand {
    /// Path to the HTML file to rewrite in place
    #[arg(required = true)]
    pub html_file: PathBuf,

    /// Directory where downloaded assets are stored
    #[arg(short = 'a', long, default_value = "static")]
    pub asset_dir: PathBuf,

    /// URL prefix identifying the remote resources to localize
    #[arg(long, default_value = "https://cdn.discordapp.com/")]
    pub host_prefix: String,

    /// User agent string to use for requests (some origins reject empty ones)
    #[arg(
        long,
        default_value = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
    )]
    pub user_agent: String,

    /// Timeout for requests in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = LocalizeCommand::try_parse_from(&["cdn-localize", "export.html"]).unwrap();

        assert_eq!(args.html_file, PathBuf::from("export.html"));
        assert_eq!(args.asset_dir, PathBuf::from("static"));
        assert_eq!(args.host_prefix, "https://cdn.discordapp.com/");
        assert_eq!(args.timeout, 30);
    }

    #[test]
    fn test_parse_all_args() {
        let args = LocalizeCommand::try_parse_from(&[
            "cdn-localize",
            "export.html",
            "-a",
            "./assets",
            "--host-prefix",
            "https://media.example.com/",
            "--user-agent",
            "test-agent/1.0",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert_eq!(args.html_file, PathBuf::from("export.html"));
        assert_eq!(args.asset_dir, PathBuf::from("./assets"));
        assert_eq!(args.host_prefix, "https://media.example.com/");
        assert_eq!(args.user_agent, "test-agent/1.0");
        assert_eq!(args.timeout, 5);
    }

    #[test]
    fn test_parse_missing_file() {
        let result = LocalizeCommand::try_parse_from(&["cdn-localize"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_timeout() {
        let result =
            LocalizeCommand::try_parse_from(&["cdn-localize", "export.html", "--timeout", "soon"]);
        assert!(result.is_err());
    }
}
