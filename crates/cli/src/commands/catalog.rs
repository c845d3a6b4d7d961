//! Catalog commands.
//!
//! # Usage
//!
//! ```bash
//! minishop-cli catalog check ./catalog.json
//! ```
//!
//! Exits non-zero when the file cannot be read or fails validation: bad
//! JSON, duplicate product IDs, blank names or negative prices.

use std::path::{Path, PathBuf};

use minishop_core::{Catalog, CatalogError};
use thiserror::Error;

/// Errors from catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not a valid catalog: {source}")]
    Invalid { path: PathBuf, source: CatalogError },
}

/// Read and validate a catalog file, returning the parsed catalog.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid catalog.
pub async fn check(path: &Path) -> Result<Catalog, CatalogCommandError> {
    tracing::info!("Checking catalog {}...", path.display());

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogCommandError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::from_json_str(&json).map_err(|source| CatalogCommandError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(products = catalog.len(), "Catalog is valid");
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "minishop-cli-{name}-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_check_valid_catalog() {
        let path = temp_file("valid", r#"[{ "id": 1, "name": "Tea", "price": 10 }]"#);
        let catalog = check(&path).await.unwrap();
        assert_eq!(catalog.len(), 1);
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_check_duplicate_ids() {
        let path = temp_file(
            "dupes",
            r#"[
                { "id": 1, "name": "Tea", "price": 10 },
                { "id": 1, "name": "Cup", "price": 5 }
            ]"#,
        );
        let err = check(&path).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogCommandError::Invalid {
                source: CatalogError::DuplicateId(_),
                ..
            }
        ));
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_check_missing_file() {
        let err = check(Path::new("/definitely/not/here.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogCommandError::Read { .. }));
    }
}
