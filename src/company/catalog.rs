//! Dataset catalog and memoized company lookup
//!
//! Cleaned datasets live in one directory and follow the naming scheme
//! `<market>_<vertical>_<zone>_cleaned.csv`.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::data::{CompanyRecord, Scope};
use super::loader::load_companies;
use super::zone::Zone;
use crate::error::Result;

const DATASET_SUFFIX: &str = "_cleaned.csv";

/// Supplier of company records for a scope.
///
/// An empty vector means the scope has no data; errors are reserved for data
/// that exists but could not be read.
pub trait CompanySource {
    fn companies(&self, scope: &Scope) -> Result<Vec<CompanyRecord>>;
}

/// Sort by revenue (largest first) and keep the first record for each name
pub fn normalize_companies(mut companies: Vec<CompanyRecord>) -> Vec<CompanyRecord> {
    companies.sort_by(|a, b| b.annual_revenue.total_cmp(&a.annual_revenue));
    let mut seen = HashSet::new();
    companies.retain(|c| seen.insert(c.name.clone()));
    companies
}

/// Directory of cleaned market datasets
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    data_dir: PathBuf,
}

impl DatasetCatalog {
    pub fn from_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn file_name(market: &str, vertical: &str, zone: Zone) -> String {
        format!("{}_{}_{}{}", market, vertical, zone.id(), DATASET_SUFFIX)
    }

    /// Existing dataset files for the scope, in zone order
    pub fn paths_for(&self, scope: &Scope) -> Vec<PathBuf> {
        scope
            .zones
            .iter()
            .map(|zone| self.data_dir.join(Self::file_name(&scope.market, &scope.vertical, *zone)))
            .filter(|path| {
                let exists = path.is_file();
                if !exists {
                    log::warn!("Dataset not found: {}", path.display());
                }
                exists
            })
            .collect()
    }

    /// Every cleaned dataset in the directory, sorted by file name.
    /// A missing directory lists as empty.
    pub fn list_datasets(&self) -> Result<Vec<PathBuf>> {
        if !self.data_dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            let is_dataset = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(DATASET_SUFFIX));
            if is_dataset {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl CompanySource for DatasetCatalog {
    fn companies(&self, scope: &Scope) -> Result<Vec<CompanyRecord>> {
        let mut merged = Vec::new();
        for path in self.paths_for(scope) {
            merged.extend(load_companies(&path)?);
        }
        Ok(normalize_companies(merged))
    }
}

/// Memoizes another source by scope
pub struct CachedCompanySource<S> {
    inner: S,
    cache: Mutex<HashMap<Scope, Arc<Vec<CompanyRecord>>>>,
}

impl<S: CompanySource> CachedCompanySource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Records for the scope, loaded once per distinct scope.
    /// Failed loads are not cached.
    pub fn lookup(&self, scope: &Scope) -> Result<Arc<Vec<CompanyRecord>>> {
        if let Some(hit) = self.cache.lock().unwrap_or_else(|e| e.into_inner()).get(scope) {
            return Ok(Arc::clone(hit));
        }

        let loaded = Arc::new(self.inner.companies(scope)?);
        log::debug!("Caching {} companies for {}", loaded.len(), scope);
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(scope.clone(), Arc::clone(&loaded));
        Ok(loaded)
    }

    pub fn cached_scopes(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn clear(&self) {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl<S: CompanySource> CompanySource for CachedCompanySource<S> {
    fn companies(&self, scope: &Scope) -> Result<Vec<CompanyRecord>> {
        Ok(self.lookup(scope)?.as_ref().clone())
    }
}
