use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::inline_parser::{DEFAULT_MAX_DEPTH, Delimiter, DelimiterTable};

/// How a single delimiter token is rendered.
///
/// In TOML either a bare tag name or a table:
///
/// ```toml
/// [delimiters]
/// "*" = "em"
/// "$" = { tag = "var", opaque = true }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DelimiterSpec {
    Tag(String),
    Detailed {
        tag: String,
        #[serde(default)]
        opaque: bool,
    },
}

impl DelimiterSpec {
    pub fn tag(&self) -> &str {
        match self {
            DelimiterSpec::Tag(tag) => tag,
            DelimiterSpec::Detailed { tag, .. } => tag,
        }
    }

    pub fn is_opaque(&self) -> bool {
        match self {
            DelimiterSpec::Tag(_) => false,
            DelimiterSpec::Detailed { opaque, .. } => *opaque,
        }
    }
}

fn default_delimiters() -> BTreeMap<String, DelimiterSpec> {
    BTreeMap::from([
        ("_".to_string(), DelimiterSpec::Tag("em".to_string())),
        ("__".to_string(), DelimiterSpec::Tag("strong".to_string())),
        (
            "`".to_string(),
            DelimiterSpec::Detailed {
                tag: "code".to_string(),
                opaque: true,
            },
        ),
    ])
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Token → tag mapping. A `[delimiters]` table in a config file replaces
    /// the built-in set entirely.
    pub delimiters: BTreeMap<String, DelimiterSpec>,
    /// Nesting levels interpreted before content is emitted as text
    pub max_depth: usize,
    /// Turn blank lines into paragraph boundaries
    pub paragraphs: bool,
    /// Wrap output in a full HTML document
    pub document: bool,
    /// Document `<title>`
    pub title: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
            max_depth: DEFAULT_MAX_DEPTH,
            paragraphs: true,
            document: true,
            title: None,
        }
    }
}

impl Config {
    /// Build the immutable table used by the renderer.
    pub fn delimiter_table(&self) -> DelimiterTable {
        DelimiterTable::new(self.delimiters.iter().map(|(token, spec)| Delimiter {
            token: token.clone(),
            tag: spec.tag().to_string(),
            opaque: spec.is_opaque(),
        }))
    }

    /// Check values that deserialize fine but cannot be rendered.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            return Err("max_depth must be at least 1".to_string());
        }

        for (token, spec) in &self.delimiters {
            if token.is_empty() {
                return Err("delimiter tokens must not be empty".to_string());
            }
            if token.contains('\\') {
                return Err(format!(
                    "delimiter {token:?} must not contain a backslash"
                ));
            }
            let tag = spec.tag();
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(format!(
                    "tag {tag:?} for delimiter {token:?} must be a non-empty ASCII alphanumeric name"
                ));
            }
        }

        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from an empty delimiter table instead of the built-in one.
    pub fn without_delimiters(mut self) -> Self {
        self.config.delimiters.clear();
        self
    }

    pub fn delimiter(mut self, token: &str, tag: &str) -> Self {
        self.config
            .delimiters
            .insert(token.to_string(), DelimiterSpec::Tag(tag.to_string()));
        self
    }

    pub fn opaque_delimiter(mut self, token: &str, tag: &str) -> Self {
        self.config.delimiters.insert(
            token.to_string(),
            DelimiterSpec::Detailed {
                tag: tag.to_string(),
                opaque: true,
            },
        );
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    pub fn paragraphs(mut self, enabled: bool) -> Self {
        self.config.paragraphs = enabled;
        self
    }

    pub fn document(mut self, enabled: bool) -> Self {
        self.config.document = enabled;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.config.title = Some(title.to_string());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".tagdown.toml", "tagdown.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    let config = toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })?;

    config.validate().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })?;

    Ok(config)
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("cannot read config {}: {e}", path.display()),
        )
    })?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("tagdown").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("tagdown")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .tagdown.toml, tagdown.toml
/// 3) XDG: $XDG_CONFIG_HOME/tagdown/config.toml or ~/.config/tagdown/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Skipping config: {e}"),
        }
    }

    if let Some(p) = xdg_config_path() {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Skipping config: {e}"),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
