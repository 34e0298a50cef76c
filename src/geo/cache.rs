//! Versioned, freshness-checked cache of the merged reference dataset.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::geo::{
    collation::compare_names,
    models::{District, DistrictRecord, Province, ProvinceRecord},
    source::{GeoSource, GeoSourceError},
};

/// Cache schema version. Bumped together with any change to [`CachedGeo`]
/// or to how the upstream datasets are merged.
pub const GEO_CACHE_VERSION: &str = "1";

/// How long a cached dataset stays acceptable.
const MAX_AGE: SignedDuration = SignedDuration::from_hours(7 * 24);

#[derive(Debug, Serialize, Deserialize)]
struct CachedGeo {
    version: String,
    fetched_at: Timestamp,
    provinces: Vec<Province>,
}

/// Errors raised while rebuilding or persisting the cache.
#[derive(Debug, Error)]
pub enum GeoCacheError {
    /// Fetching a reference dataset failed.
    #[error(transparent)]
    Source(#[from] GeoSourceError),

    /// Reading or writing the cache file failed.
    #[error("geo cache storage error")]
    Io(#[from] io::Error),

    /// The cache file could not be (de)serialized.
    #[error("geo cache serialization error")]
    Serde(#[from] serde_json::Error),
}

/// File-backed province/district cache.
///
/// A persisted entry is served only when its version tag matches and it is
/// younger than the freshness window; anything else counts as a miss and
/// triggers one fetch-and-rebuild.
#[derive(Debug, Clone)]
pub struct GeoCache {
    path: PathBuf,
    max_age: SignedDuration,
}

impl GeoCache {
    /// Create a cache backed by the given file path with the default
    /// seven-day freshness window.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_age: MAX_AGE,
        }
    }

    /// Override the freshness window.
    #[must_use]
    pub fn with_max_age(mut self, max_age: SignedDuration) -> Self {
        self.max_age = max_age;
        self
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The merged province list, from cache when fresh, rebuilt otherwise.
    ///
    /// A failed rebuild is logged and yields an empty list so dependent
    /// pickers stay empty but functional.
    pub async fn provinces(&self, source: &dyn GeoSource) -> Vec<Province> {
        if let Some(provinces) = self.read_fresh() {
            debug!(count = provinces.len(), "serving provinces from cache");
            return provinces;
        }

        match self.rebuild(source).await {
            Ok(provinces) => provinces,
            Err(e) => {
                error!(error = %e, "geo cache rebuild failed, exposing empty list");
                Vec::new()
            }
        }
    }

    fn read_fresh(&self) -> Option<Vec<Province>> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let cached: CachedGeo = serde_json::from_str(&raw).ok()?;

        if cached.version != GEO_CACHE_VERSION {
            debug!(
                found = %cached.version,
                expected = GEO_CACHE_VERSION,
                "geo cache version mismatch"
            );
            return None;
        }

        let age = Timestamp::now().duration_since(cached.fetched_at);

        if age > self.max_age {
            debug!(age_hours = age.as_hours(), "geo cache is stale");
            return None;
        }

        Some(cached.provinces)
    }

    async fn rebuild(&self, source: &dyn GeoSource) -> Result<Vec<Province>, GeoCacheError> {
        let (provinces, districts) =
            tokio::try_join!(source.fetch_provinces(), source.fetch_districts())?;

        let merged = merge(provinces, districts);

        if let Err(e) = self.persist(&merged) {
            // A write failure only costs a refetch next time.
            warn!(error = %e, "failed to persist geo cache");
        }

        Ok(merged)
    }

    fn persist(&self, provinces: &[Province]) -> Result<(), GeoCacheError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let cached = CachedGeo {
            version: GEO_CACHE_VERSION.to_owned(),
            fetched_at: Timestamp::now(),
            provinces: provinces.to_vec(),
        };

        fs::write(&self.path, serde_json::to_string(&cached)?)?;

        Ok(())
    }
}

/// Merge districts under their parent provinces by the parent-code foreign
/// key and sort both levels with Vietnamese-aware collation. Districts
/// whose parent code matches no province are dropped with a warning.
fn merge(
    provinces: FxHashMap<String, ProvinceRecord>,
    districts: FxHashMap<String, DistrictRecord>,
) -> Vec<Province> {
    let mut merged: FxHashMap<String, Province> = provinces
        .into_iter()
        .map(|(code, record)| {
            let province = Province {
                code: code.clone(),
                name: record.name,
                districts: Vec::new(),
            };
            (code, province)
        })
        .collect();

    for (code, record) in districts {
        match merged.get_mut(&record.parent_code) {
            Some(province) => province.districts.push(District {
                code,
                name: record.name,
            }),
            None => warn!(
                district = %code,
                parent = %record.parent_code,
                "district references unknown province, dropping"
            ),
        }
    }

    let mut provinces: Vec<Province> = merged.into_values().collect();

    for province in &mut provinces {
        province
            .districts
            .sort_by(|a, b| compare_names(&a.name, &b.name));
    }

    provinces.sort_by(|a, b| compare_names(&a.name, &b.name));
    provinces
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::geo::source::MockGeoSource;

    use super::*;

    fn province_record(name: &str) -> ProvinceRecord {
        ProvinceRecord {
            name: name.to_owned(),
        }
    }

    fn district_record(name: &str, parent: &str) -> DistrictRecord {
        DistrictRecord {
            name: name.to_owned(),
            parent_code: parent.to_owned(),
        }
    }

    fn upstream() -> MockGeoSource {
        let mut source = MockGeoSource::new();

        source.expect_fetch_provinces().once().return_once(|| {
            Ok([
                ("01".to_owned(), province_record("Hà Nội")),
                ("48".to_owned(), province_record("Đà Nẵng")),
            ]
            .into_iter()
            .collect())
        });

        source.expect_fetch_districts().once().return_once(|| {
            Ok([
                ("001".to_owned(), district_record("Ba Đình", "01")),
                ("002".to_owned(), district_record("Hoàn Kiếm", "01")),
                ("490".to_owned(), district_record("Hải Châu", "48")),
                ("999".to_owned(), district_record("Nơi nào đó", "77")),
            ]
            .into_iter()
            .collect())
        });

        source
    }

    #[tokio::test]
    async fn cold_cache_fetches_merges_and_persists() -> TestResult {
        let dir = tempfile::tempdir()?;
        let cache = GeoCache::new(dir.path().join("geo.json"));

        let provinces = cache.provinces(&upstream()).await;

        let names: Vec<&str> = provinces.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Đà Nẵng", "Hà Nội"], "folded sort order");

        let hanoi = provinces.iter().find(|p| p.code == "01");
        let districts: Vec<&str> = hanoi
            .map(|p| p.districts.iter().map(|d| d.name.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(districts, vec!["Ba Đình", "Hoàn Kiếm"]);

        assert!(cache.path().exists(), "cache file persisted");

        Ok(())
    }

    #[tokio::test]
    async fn fresh_cache_serves_without_fetching() -> TestResult {
        let dir = tempfile::tempdir()?;
        let cache = GeoCache::new(dir.path().join("geo.json"));

        // Warm it once.
        cache.provinces(&upstream()).await;

        // A source with no expectations panics on any call.
        let untouched = MockGeoSource::new();
        let provinces = cache.provinces(&untouched).await;

        assert_eq!(provinces.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn stale_cache_triggers_one_rebuild_with_new_timestamp() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("geo.json");

        let old = Timestamp::now().checked_sub(SignedDuration::from_hours(8 * 24))?;
        let stale = CachedGeo {
            version: GEO_CACHE_VERSION.to_owned(),
            fetched_at: old,
            provinces: Vec::new(),
        };
        fs::write(&path, serde_json::to_string(&stale)?)?;

        let cache = GeoCache::new(&path);
        let provinces = cache.provinces(&upstream()).await;

        assert_eq!(provinces.len(), 2);

        let rebuilt: CachedGeo = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert!(rebuilt.fetched_at > old, "timestamp refreshed");

        Ok(())
    }

    #[tokio::test]
    async fn version_mismatch_triggers_rebuild() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("geo.json");

        let outdated = serde_json::json!({
            "version": "0",
            "fetched_at": Timestamp::now(),
            "provinces": [],
        });
        fs::write(&path, outdated.to_string())?;

        let provinces = GeoCache::new(&path).provinces(&upstream()).await;

        assert_eq!(provinces.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn fetch_failure_on_miss_exposes_empty_list() -> TestResult {
        let dir = tempfile::tempdir()?;
        let cache = GeoCache::new(dir.path().join("geo.json"));

        let mut source = MockGeoSource::new();
        source
            .expect_fetch_provinces()
            .once()
            .return_once(|| Ok(FxHashMap::default()));
        source.expect_fetch_districts().once().return_once(|| {
            let parse_failure = match serde_json::from_str::<i32>("not json") {
                Err(e) => e,
                Ok(_) => unreachable!("parsing must fail"),
            };
            Err(GeoSourceError::Decode(parse_failure))
        });

        let provinces = cache.provinces(&source).await;

        assert!(provinces.is_empty());

        Ok(())
    }
}
