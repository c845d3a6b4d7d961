//! Catalog loading at startup.
//!
//! The catalog comes from `CATALOG_PATH` when set, otherwise from the seed
//! catalog compiled into the binary (`catalog/default.json`).

use std::path::{Path, PathBuf};

use thiserror::Error;

use minishop_core::{Catalog, CatalogError};

/// Seed catalog used when no catalog file is configured.
const DEFAULT_CATALOG: &str = include_str!("../catalog/default.json");

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Load the catalog from a file, or the built-in seed catalog if `path` is `None`.
///
/// # Errors
///
/// Returns `CatalogLoadError::Io` if the file cannot be read and
/// `CatalogLoadError::Invalid` if its contents fail validation.
pub async fn load(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let Some(path) = path else {
        return Catalog::from_json_str(DEFAULT_CATALOG).map_err(|source| {
            CatalogLoadError::Invalid {
                path: PathBuf::from("<built-in>"),
                source,
            }
        });
    };

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Catalog::from_json_str(&json).map_err(|source| CatalogLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_catalog_is_valid() {
        let catalog = load(None).await.unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = load(Some(Path::new("/definitely/not/here.json"))).await;
        assert!(matches!(result, Err(CatalogLoadError::Io { .. })));
    }

    #[tokio::test]
    async fn test_file_catalog() {
        let path = std::env::temp_dir().join(format!("minishop-catalog-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, r#"[{ "id": 1, "name": "Tea", "price": 3 }]"#)
            .await
            .unwrap();

        let catalog = load(Some(&path)).await.unwrap();
        assert_eq!(catalog.len(), 1);

        tokio::fs::write(&path, "not json").await.unwrap();
        let result = load(Some(&path)).await;
        assert!(matches!(result, Err(CatalogLoadError::Invalid { .. })));

        let _ = tokio::fs::remove_file(&path).await;
    }
}
