//! quizbox configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizbox_core::model::ChoiceLabels;

/// Top-level quizbox configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizboxConfig {
    /// Player name used when `--name` is not given. Blank means "Guest".
    #[serde(default)]
    pub player_name: String,
    /// Label of the "true" option of true/false questions.
    #[serde(default = "default_true_label")]
    pub true_label: String,
    /// Label of the "false" option of true/false questions.
    #[serde(default = "default_false_label")]
    pub false_label: String,
    /// Static asset server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Settings for `quizbox serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

fn default_true_label() -> String {
    ChoiceLabels::default().true_label
}
fn default_false_label() -> String {
    ChoiceLabels::default().false_label
}
fn default_bind() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
fn default_port() -> u16 {
    quizbox_server::DEFAULT_PORT
}
fn default_assets_dir() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Default for QuizboxConfig {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            true_label: default_true_label(),
            false_label: default_false_label(),
            server: ServerConfig::default(),
        }
    }
}

impl QuizboxConfig {
    pub fn labels(&self) -> ChoiceLabels {
        ChoiceLabels {
            true_label: self.true_label.clone(),
            false_label: self.false_label.clone(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Expansion is a single left-to-right pass: substituted values are copied
/// through as-is and never rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_config(config: QuizboxConfig) -> QuizboxConfig {
    QuizboxConfig {
        player_name: resolve_env_vars(&config.player_name),
        true_label: resolve_env_vars(&config.true_label),
        false_label: resolve_env_vars(&config.false_label),
        server: ServerConfig {
            assets_dir: PathBuf::from(resolve_env_vars(
                &config.server.assets_dir.to_string_lossy(),
            )),
            ..config.server
        },
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizbox.toml` in the current directory
/// 2. `~/.config/quizbox/config.toml`
///
/// `QUIZBOX_PORT` overrides the server port.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizboxConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbox.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizboxConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizboxConfig::default(),
    };

    let mut config = resolve_config(config);

    if let Ok(port) = std::env::var("QUIZBOX_PORT") {
        config.server.port = port
            .trim()
            .parse()
            .with_context(|| format!("invalid QUIZBOX_PORT: {port}"))?;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbox"))
}
