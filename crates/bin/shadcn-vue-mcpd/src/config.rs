use clap::{Parser, ValueEnum, builder::BoolishValueParser};
use shadcn_vue_catalog::catalog::{
    CDN_DOCS_BASE,
    CDN_REGISTRY_BASE,
    CONTEXT7_API_BASE,
    LIBRARY_ID,
    RAW_DOCS_BASE,
    RAW_REGISTRY_BASE,
};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_DOC_TOKENS: u32 = 700;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CACHE_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_CACHE_MAX_ENTRIES: usize = 100;
const DEFAULT_CACHE_SWEEP_SECS: u64 = 600;

/// Log output format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "shadcn-vue-mcpd", version, about = "shadcn-vue MCP daemon.")]
struct CliArgs {
    #[arg(
        long = "stdio",
        env = "SHADCN_MCP_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long = "http",
        env = "SHADCN_MCP_HTTP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    http_serve: bool,

    #[arg(long, env = "SHADCN_MCP_HTTP_ADDR", default_value = DEFAULT_HTTP_ADDR)]
    http_addr: SocketAddr,

    #[arg(long, env = "SHADCN_MCP_CDN_BASE", default_value = CDN_DOCS_BASE)]
    cdn_base: String,

    #[arg(long, env = "SHADCN_MCP_FALLBACK_BASE", default_value = RAW_DOCS_BASE)]
    fallback_base: String,

    #[arg(long, env = "SHADCN_MCP_REGISTRY_BASE", default_value = CDN_REGISTRY_BASE)]
    registry_base: String,

    #[arg(
        long,
        env = "SHADCN_MCP_REGISTRY_FALLBACK_BASE",
        default_value = RAW_REGISTRY_BASE
    )]
    registry_fallback_base: String,

    #[arg(long, env = "SHADCN_MCP_CONTEXT7_BASE", default_value = CONTEXT7_API_BASE)]
    context7_base: String,

    #[arg(long, env = "SHADCN_MCP_LIBRARY_ID", default_value = LIBRARY_ID)]
    library_id: String,

    #[arg(long, env = "SHADCN_MCP_DOC_TOKENS", default_value_t = DEFAULT_DOC_TOKENS)]
    doc_tokens: u32,

    #[arg(
        long,
        env = "SHADCN_MCP_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    request_timeout_secs: u64,

    #[arg(
        long,
        env = "SHADCN_MCP_CACHE_TTL_SECS",
        default_value_t = DEFAULT_CACHE_TTL_SECS
    )]
    cache_ttl_secs: u64,

    #[arg(
        long,
        env = "SHADCN_MCP_CACHE_MAX_ENTRIES",
        default_value_t = DEFAULT_CACHE_MAX_ENTRIES
    )]
    cache_max_entries: usize,

    #[arg(
        long,
        env = "SHADCN_MCP_CACHE_SWEEP_SECS",
        default_value_t = DEFAULT_CACHE_SWEEP_SECS
    )]
    cache_sweep_secs: u64,

    #[arg(long, env = "SHADCN_MCP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct McpdConfig {
    pub enable_stdio: bool,
    pub http_serve: bool,
    pub http_addr: SocketAddr,
    pub docs_base: String,
    pub docs_fallback_base: String,
    pub registry_base: String,
    pub registry_fallback_base: String,
    pub context7_base: String,
    pub library_id: String,
    pub doc_tokens: u32,
    pub request_timeout: Duration,
    pub cache_ttl: Option<Duration>,
    pub cache_max_entries: usize,
    pub cache_sweep_interval: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug)]
pub enum ConfigError {
    NoTransport,
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransport => {
                write!(f, "no transport enabled: pass --stdio true or --http true")
            }
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl McpdConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for McpdConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.enable_stdio && !args.http_serve {
            return Err(ConfigError::NoTransport);
        }
        if args.doc_tokens == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "SHADCN_MCP_DOC_TOKENS",
                value: args.doc_tokens.to_string(),
            });
        }
        if args.cache_max_entries == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "SHADCN_MCP_CACHE_MAX_ENTRIES",
                value: args.cache_max_entries.to_string(),
            });
        }
        if args.cache_sweep_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "SHADCN_MCP_CACHE_SWEEP_SECS",
                value: args.cache_sweep_secs.to_string(),
            });
        }
        if args.library_id.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "SHADCN_MCP_LIBRARY_ID",
                value: args.library_id,
            });
        }

        let cache_ttl = if args.cache_ttl_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.cache_ttl_secs))
        };

        Ok(Self {
            enable_stdio: args.enable_stdio,
            http_serve: args.http_serve,
            http_addr: args.http_addr,
            docs_base: base_url("SHADCN_MCP_CDN_BASE", args.cdn_base)?,
            docs_fallback_base: base_url("SHADCN_MCP_FALLBACK_BASE", args.fallback_base)?,
            registry_base: base_url("SHADCN_MCP_REGISTRY_BASE", args.registry_base)?,
            registry_fallback_base: base_url(
                "SHADCN_MCP_REGISTRY_FALLBACK_BASE",
                args.registry_fallback_base,
            )?,
            context7_base: base_url("SHADCN_MCP_CONTEXT7_BASE", args.context7_base)?,
            library_id: args.library_id.trim().to_string(),
            doc_tokens: args.doc_tokens,
            request_timeout: Duration::from_secs(args.request_timeout_secs.max(1)),
            cache_ttl,
            cache_max_entries: args.cache_max_entries,
            cache_sweep_interval: Duration::from_secs(args.cache_sweep_secs),
            log_format: args.log_format,
        })
    }
}

fn base_url(name: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidSetting { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            enable_stdio: true,
            http_serve: false,
            http_addr: DEFAULT_HTTP_ADDR.parse().expect("valid HTTP addr"),
            cdn_base: CDN_DOCS_BASE.to_string(),
            fallback_base: RAW_DOCS_BASE.to_string(),
            registry_base: CDN_REGISTRY_BASE.to_string(),
            registry_fallback_base: RAW_REGISTRY_BASE.to_string(),
            context7_base: CONTEXT7_API_BASE.to_string(),
            library_id: LIBRARY_ID.to_string(),
            doc_tokens: DEFAULT_DOC_TOKENS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            cache_sweep_secs: DEFAULT_CACHE_SWEEP_SECS,
            log_format: LogFormat::Text,
        }
    }

    #[test]
    fn defaults_parse_into_stdio_only_config() {
        let config = McpdConfig::try_from(base_args()).expect("config should parse");

        assert!(config.enable_stdio);
        assert!(!config.http_serve);
        assert_eq!(config.docs_base, CDN_DOCS_BASE);
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(86_400)));
        assert_eq!(config.cache_sweep_interval, Duration::from_secs(600));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn cli_defaults_match_documented_values() {
        let args = CliArgs::try_parse_from(["shadcn-vue-mcpd"]).expect("defaults parse");
        assert!(args.enable_stdio);
        assert!(!args.http_serve);
        assert_eq!(args.http_addr.to_string(), DEFAULT_HTTP_ADDR);
        assert_eq!(args.doc_tokens, 700);
    }

    #[test]
    fn rejects_config_without_transport() {
        let mut args = base_args();
        args.enable_stdio = false;

        let err = McpdConfig::try_from(args).expect_err("no transport");
        assert!(matches!(err, ConfigError::NoTransport));
    }

    #[test]
    fn zero_ttl_disables_expiry() {
        let mut args = base_args();
        args.cache_ttl_secs = 0;

        let config = McpdConfig::try_from(args).expect("config should parse");
        assert!(config.cache_ttl.is_none());
    }

    #[test]
    fn trims_trailing_slash_from_bases() {
        let mut args = base_args();
        args.context7_base = "http://127.0.0.1:9000/api/".to_string();

        let config = McpdConfig::try_from(args).expect("config should parse");
        assert_eq!(config.context7_base, "http://127.0.0.1:9000/api");
    }

    #[test]
    fn rejects_non_http_base() {
        let mut args = base_args();
        args.registry_base = "ftp://mirror/registry".to_string();

        let err = McpdConfig::try_from(args).expect_err("bad base");
        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                name: "SHADCN_MCP_REGISTRY_BASE",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_limits() {
        let mut args = base_args();
        args.doc_tokens = 0;
        assert!(McpdConfig::try_from(args).is_err());

        let mut args = base_args();
        args.cache_max_entries = 0;
        assert!(McpdConfig::try_from(args).is_err());

        let mut args = base_args();
        args.cache_sweep_secs = 0;
        let err = McpdConfig::try_from(args).expect_err("zero sweep interval");
        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                name: "SHADCN_MCP_CACHE_SWEEP_SECS",
                ..
            }
        ));
    }
}
