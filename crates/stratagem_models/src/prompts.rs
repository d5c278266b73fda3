//! Named prompt templates on disk.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use stratagem_core::SectionId;
use stratagem_error::{ConfigError, StratagemResult};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Maps prompt ids to template files.
///
/// Every [`SectionId`] is pre-registered as `<directory>/<id>.txt`. Templates are
/// plain UTF-8 text that the registry never interprets. They are read on first
/// use and cached; the cache is read-only afterwards, so one registry can be
/// shared by generators running concurrently.
///
/// # Examples
///
/// ```
/// use stratagem_models::PromptRegistry;
///
/// let registry = PromptRegistry::new("prompts");
/// assert!(registry.path("insights").unwrap().ends_with("insights.txt"));
/// assert!(registry.path("pricing").is_err());
/// ```
#[derive(Debug)]
pub struct PromptRegistry {
    directory: PathBuf,
    paths: BTreeMap<String, PathBuf>,
    cache: RwLock<HashMap<String, Arc<str>>>,
}

impl PromptRegistry {
    /// Creates a registry rooted at `directory` with every section id registered.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        let paths = SectionId::iter()
            .map(|id| (id.to_string(), directory.join(format!("{}.txt", id))))
            .collect();
        Self {
            directory,
            paths,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Registers (or re-points) `prompt_id`. Relative paths resolve against the
    /// registry directory.
    pub fn register(&mut self, prompt_id: impl Into<String>, path: impl AsRef<Path>) {
        let prompt_id = prompt_id.into();
        let path = self.directory.join(path.as_ref());
        self.cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&prompt_id);
        self.paths.insert(prompt_id, path);
    }

    /// Root directory for relative template paths.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    /// Template path registered for `prompt_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown id.
    pub fn path(&self, prompt_id: &str) -> StratagemResult<&Path> {
        self.paths
            .get(prompt_id)
            .map(PathBuf::as_path)
            .ok_or_else(|| ConfigError::new(format!("Unknown prompt id: {}", prompt_id)).into())
    }

    /// Template text for `prompt_id`, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown id or a file that cannot be read
    /// as UTF-8 text.
    #[instrument(skip(self))]
    pub fn template(&self, prompt_id: &str) -> StratagemResult<Arc<str>> {
        if let Some(cached) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(prompt_id)
        {
            return Ok(Arc::clone(cached));
        }

        let path = self.path(prompt_id)?;
        debug!(path = %path.display(), "Loading prompt template");
        let bytes = std::fs::read(path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read prompt '{}' from {}: {}",
                prompt_id,
                path.display(),
                e
            ))
        })?;
        let text = String::from_utf8(bytes).map_err(|e| {
            ConfigError::new(format!(
                "Prompt '{}' at {} is not valid UTF-8: {}",
                prompt_id,
                path.display(),
                e
            ))
        })?;

        let template: Arc<str> = Arc::from(text);
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // A concurrent first use may have won the race; keep its copy.
        let entry = cache
            .entry(prompt_id.to_string())
            .or_insert_with(|| Arc::clone(&template));
        Ok(Arc::clone(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_is_registered() {
        let registry = PromptRegistry::new("/tmp/prompts");
        for id in SectionId::iter() {
            let path = registry.path(id.as_ref()).unwrap();
            assert_eq!(path, Path::new("/tmp/prompts").join(format!("{}.txt", id)));
        }
        assert_eq!(registry.ids().count(), SectionId::iter().count());
    }

    #[test]
    fn test_unknown_id_is_config_error() {
        let registry = PromptRegistry::new("prompts");
        let err = registry.template("nope").unwrap_err();
        assert!(matches!(
            err.kind(),
            stratagem_error::StratagemErrorKind::Config(_)
        ));
    }
}
