//! JSON file store for the route catalog.
//!
//! The file holds a JSON array of routes, normalized fingerprints included.
//! A missing file reads as an empty catalog. Saves write a sibling temp file
//! and rename it over the store.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use holdprint_core::{Route, RouteCatalog};

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Loads the catalog stored at `path`.
pub fn load(path: &Path) -> anyhow::Result<RouteCatalog> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "store missing, starting empty");
        return Ok(RouteCatalog::new());
    }

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let routes: Vec<Route> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;

    tracing::debug!(path = %path.display(), routes = routes.len(), "store loaded");
    Ok(RouteCatalog::from_routes(routes))
}

/// Writes the current catalog snapshot to `path`.
pub fn save(path: &Path, catalog: &RouteCatalog) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let snapshot = catalog.snapshot();
    let tmp = temp_path(path);
    {
        let file = File::create(&tmp).with_context(|| format!("creating {}", tmp.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot.as_slice())?;
        writer.flush()?;
    }
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;

    tracing::debug!(path = %path.display(), routes = snapshot.len(), "store saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdprint_core::{normalize, Point};

    #[test]
    fn test_missing_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load(&dir.path().join("routes.json")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("routes.json");
        let catalog = RouteCatalog::new();
        let id = catalog.add_route("Corner");
        catalog
            .add_image(&id, "corner.jpg", vec![Point::new(0.1, 0.2), Point::new(0.3, 0.9)])
            .unwrap();

        // Act
        save(&path, &catalog).unwrap();
        let loaded = load(&path).unwrap();

        // Assert
        assert_eq!(*loaded.snapshot(), *catalog.snapshot());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_loaded_fingerprints_match_renormalized_points() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        let catalog = RouteCatalog::new();
        let id = catalog.add_route("Arete");
        let points = vec![
            Point::new(0.137, 0.291),
            Point::new(0.713, 0.083),
            Point::new(0.512, 0.947),
            Point::new(0.309, 0.618),
        ];
        catalog.add_image(&id, "arete.jpg", points).unwrap();

        // Act
        save(&path, &catalog).unwrap();
        let loaded = load(&path).unwrap();

        // Assert
        let route = loaded.get(&id).unwrap();
        for image in &route.images {
            assert_eq!(image.normalized_points, normalize(&image.points));
        }
    }

    #[test]
    fn test_corrupt_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_err());
    }
}
