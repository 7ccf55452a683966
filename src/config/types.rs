use serde::Deserialize;

/// Main configuration structure for the scraper
///
/// Every section is optional in the TOML file; missing sections fall back
/// to the defaults that target the public Python documentation sites.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sites: SitesConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub http: HttpConfig,
    pub cache: CacheConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Landing pages the extractors start from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitesConfig {
    /// Root of the Python 3 documentation
    #[serde(rename = "main-doc-url")]
    pub main_doc_url: String,

    /// Root of the PEP index
    #[serde(rename = "peps-url")]
    pub peps_url: String,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            main_doc_url: "https://docs.python.org/3/".to_string(),
            peps_url: "https://peps.python.org/".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the scraper
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "pydocs-scraper".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/pydocs-scraper/pydocs-scraper".to_string(),
        }
    }
}

/// HTTP transport settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Character set used to decode fetched pages
    pub charset: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            charset: "utf-8".to_string(),
        }
    }
}

/// Response cache configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Path to the SQLite cache database
    pub path: String,

    /// Entries older than this are refetched; `None` keeps them forever
    #[serde(rename = "expire-after-secs")]
    pub expire_after_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: "pydocs_cache.sqlite".to_string(),
            expire_after_secs: None,
        }
    }
}

/// Output locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for CSV result files
    #[serde(rename = "results-dir")]
    pub results_dir: String,

    /// Directory for downloaded archives
    #[serde(rename = "downloads-dir")]
    pub downloads_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: "results".to_string(),
            downloads_dir: "downloads".to_string(),
        }
    }
}

/// Log file location and rotation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory holding the log files
    pub dir: String,

    /// Name of the active log file
    #[serde(rename = "file-name")]
    pub file_name: String,

    /// Size at which the active file is rotated
    #[serde(rename = "max-bytes")]
    pub max_bytes: u64,

    /// Number of rotated files kept next to the active one
    pub backups: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
            file_name: "parser.log".to_string(),
            max_bytes: 1_000_000,
            backups: 5,
        }
    }
}
