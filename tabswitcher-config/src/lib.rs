//! Configuration for the tab switcher layout.
//!
//! The configuration is a KDL document decoded with knuffel. Every node is optional and falls
//! back to the defaults in [`layout`].

use std::fs;
use std::path::Path;

use miette::{Context as _, IntoDiagnostic as _};
use tracing::debug;

pub mod layout;

pub use crate::layout::Layout;

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub layout: Layout,
}

impl Config {
    /// Parses a config from its KDL source.
    ///
    /// `filename` is only used in diagnostics.
    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        let _span = tracing::debug_span!("Config::parse").entered();
        knuffel::parse(filename, text)
    }

    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("config.kdl");

        let config = Self::parse(filename, &contents).context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }
}
