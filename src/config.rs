use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use textwork_lists::ContinueOptions;

use crate::editing::Placement;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Columns added by Tab and removed by Shift+Tab when the editor does not
    /// report its own tab size.
    pub tab_size: usize,
    /// Rewrite `*` bullets to `•` when continuing them.
    pub normalize_asterisk: bool,
    pub stamp: StampConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: 4,
            normalize_asterisk: true,
            stamp: StampConfig::default(),
        }
    }
}

impl Config {
    pub fn continue_options(&self) -> ContinueOptions {
        ContinueOptions {
            normalize_asterisk: self.normalize_asterisk,
        }
    }

    /// Editor-reported tab size when it is usable, the configured one otherwise.
    pub fn effective_tab_size(&self, reported: Option<usize>) -> usize {
        reported.filter(|w| *w > 0).unwrap_or(self.tab_size)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct StampConfig {
    /// Where `stamp` puts the line when the command line does not say.
    pub placement: Placement,
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn tab_size(mut self, width: usize) -> Self {
        self.config.tab_size = width;
        self
    }

    pub fn normalize_asterisk(mut self, enabled: bool) -> Self {
        self.config.normalize_asterisk = enabled;
        self
    }

    pub fn stamp_placement(mut self, placement: Placement) -> Self {
        self.config.stamp.placement = placement;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".textwork.toml", "textwork.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    let config = toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })?;
    if config.tab_size == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: tab-size must be at least 1", path.display()),
        ));
    }
    Ok(config)
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
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

fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("textwork").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    let p = dirs::config_dir()?.join("textwork").join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .textwork.toml, textwork.toml
/// 3) user config: $XDG_CONFIG_HOME/textwork/config.toml, then the platform
///    config directory
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    if let Some(p) = user_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
