//! Portfolio content loading.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::warn;

use vitrine_types::Portfolio;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read portfolio {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse portfolio {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse embedded portfolio")]
    ParseEmbedded(#[source] toml::de::Error),
}

pub fn load_portfolio(path: &Path) -> Result<Portfolio, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let portfolio: Portfolio = toml::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    lint(&portfolio);
    Ok(portfolio)
}

/// Parse an embedded document (the built-in demo portfolio).
pub fn parse_portfolio(raw: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = toml::from_str(raw).map_err(ContentError::ParseEmbedded)?;
    lint(&portfolio);
    Ok(portfolio)
}

/// Degradations stay silent at use sites; surface them once at load.
fn lint(portfolio: &Portfolio) {
    if portfolio.menu.is_empty() {
        warn!("portfolio has no menu items");
    }
    for item in &portfolio.menu {
        if portfolio.section_index(&item.target).is_none() {
            warn!(
                section = %item.target,
                label = %item.label,
                "menu item targets an unknown section; selecting it will be a no-op"
            );
        }
    }
    for section in &portfolio.sections {
        for stat in &section.stats {
            if stat.parsed_target().is_none() {
                warn!(
                    section = %section.id,
                    label = %stat.label,
                    "stat target is not numeric; it will not animate"
                );
            }
        }
    }
}
