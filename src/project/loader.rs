//! Corpus discovery and parallel scenario loading.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::base::constants::DEFAULT_SCENARIO_EXTENSION;
use crate::parser::ParserConfig;

use super::error::LoadError;
use super::scenario::{Scenario, ScenarioKey};

/// Settings for loading scenario files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// File extension of scenario files, without the dot.
    pub extension: String,
    pub parser: ParserConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_SCENARIO_EXTENSION.to_string(),
            parser: ParserConfig::default(),
        }
    }
}

/// Result of loading a whole corpus.
///
/// A scenario that fails to load is recorded in `failures` and does not stop
/// the others from loading.
#[derive(Debug, Default)]
pub struct Corpus {
    /// Successfully parsed scenarios, ordered by key.
    pub scenarios: Vec<Scenario>,
    /// Scenarios that could not be read or parsed, ordered by key.
    pub failures: Vec<(ScenarioKey, LoadError)>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Collect every `<root>/<req>/<ucid>.<extension>` file, ordered by key.
///
/// The use-case id is the file name up to its first `.`.
pub fn collect_scenario_paths(
    root: &Path,
    extension: &str,
) -> Result<Vec<(ScenarioKey, PathBuf)>, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::NotFound(root.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).min_depth(2).max_depth(2) {
        let entry = entry?;
        if !entry.file_type().is_file()
            || entry.path().extension().is_none_or(|ext| ext != extension)
        {
            continue;
        }
        let Some(req) = entry
            .path()
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
        else {
            continue;
        };
        let file_name = entry.file_name().to_string_lossy();
        let ucid = file_name.split('.').next().unwrap_or_default().to_owned();
        paths.push((ScenarioKey::new(req, ucid), entry.into_path()));
    }

    paths.sort();
    Ok(paths)
}

/// Read and parse one scenario file.
pub fn load_file(key: ScenarioKey, path: &Path, config: &LoaderConfig) -> Result<Scenario, LoadError> {
    let text = std::fs::read_to_string(path)?;
    Scenario::parse_with(key, &text, &config.parser)
}

/// Load a single scenario by requirement and use-case id.
pub fn load_scenario(
    root: impl AsRef<Path>,
    req: &str,
    ucid: &str,
    config: &LoaderConfig,
) -> Result<Scenario, LoadError> {
    let path = root
        .as_ref()
        .join(req)
        .join(format!("{ucid}.{}", config.extension));
    if !path.is_file() {
        return Err(LoadError::NotFound(path));
    }
    load_file(ScenarioKey::new(req, ucid), &path, config)
}

/// Load and parse every scenario under `root` in parallel.
///
/// Fails only if the corpus directory itself cannot be listed.
pub fn load_corpus(root: impl AsRef<Path>, config: &LoaderConfig) -> Result<Corpus, LoadError> {
    let paths = collect_scenario_paths(root.as_ref(), &config.extension)?;

    let results: Vec<_> = paths
        .into_par_iter()
        .map(|(key, path)| match load_file(key.clone(), &path, config) {
            Ok(scenario) => Ok(scenario),
            Err(err) => Err((key, err)),
        })
        .collect();

    let mut corpus = Corpus::default();
    for result in results {
        match result {
            Ok(scenario) => corpus.scenarios.push(scenario),
            Err((key, err)) => {
                tracing::warn!("skipping scenario {key}: {err}");
                corpus.failures.push((key, err));
            }
        }
    }

    tracing::debug!(
        "loaded {} scenarios from {} ({} failed)",
        corpus.scenarios.len(),
        root.as_ref().display(),
        corpus.failures.len()
    );
    Ok(corpus)
}
