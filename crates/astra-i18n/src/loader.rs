use crate::bundle::TranslationBundle;
use crate::error::LocaleError;
use crate::table::LocaleTable;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where a locale table comes from.
///
/// Loading is the first phase of the skill lifecycle and always completes
/// (and validates) before any request is dispatched.
#[async_trait]
pub trait BundleSource: Send + Sync {
    async fn load(&self) -> Result<LocaleTable, LocaleError>;
}

/// The translations compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl BundleSource for BuiltinSource {
    async fn load(&self) -> Result<LocaleTable, LocaleError> {
        let table = LocaleTable::builtin();
        table.validate()?;
        Ok(table)
    }
}

/// Loads `<tag>.json` bundle files from a directory.
///
/// Each file holds one bundle as a key/value object; the locale tag is
/// the file stem ("en-US.json" -> "en-US"). Non-JSON entries are skipped.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl BundleSource for DirSource {
    async fn load(&self) -> Result<LocaleTable, LocaleError> {
        let mut table = LocaleTable::new();

        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| read_error(&self.dir, &e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| read_error(&self.dir, &e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(tag) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let tag = tag.to_string();

            let raw = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| read_error(&path, &e.to_string()))?;
            let bundle: TranslationBundle =
                serde_json::from_str(&raw).map_err(|e| LocaleError::InvalidBundle {
                    locale: tag.clone(),
                    reason: e.to_string(),
                })?;

            debug!("loaded bundle '{tag}' ({} keys) from {}", bundle.len(), path.display());
            table.insert(tag, bundle);
        }

        table.validate()?;
        info!(
            "locale table loaded from {}: {} bundles",
            self.dir.display(),
            table.len()
        );
        Ok(table)
    }
}

fn read_error(path: &Path, reason: &str) -> LocaleError {
    LocaleError::InvalidBundle {
        locale: path.display().to_string(),
        reason: reason.to_string(),
    }
}
