//! Asset Selection
//!
//! Chooses the stylesheet and script references for the rendered
//! document by deployment mode. Development emits the single fixed
//! bundle script the dev server provides. Production reads the asset
//! manifest the bundler generated (logical name to hashed filename)
//! and emits exactly those references.
//!
//! The manifest is read fresh on every request, so a redeploy that
//! rewrites it takes effect without a server restart.

use crate::config::{AssetsConfig, DeployMode};
use crate::ssr::error::SsrError;
use std::collections::HashMap;

/// Manifest keys the bundler writes
const MANIFEST_CSS_KEY: &str = "app.css";
const MANIFEST_JS_KEY: &str = "app.js";

/// Asset references for one rendered document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetRefs {
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

/// Select asset references for the given deployment mode.
pub async fn select_assets(mode: DeployMode, config: &AssetsConfig) -> Result<AssetRefs, SsrError> {
    match mode {
        DeployMode::Development => Ok(AssetRefs {
            stylesheets: Vec::new(),
            scripts: vec![config.dev_bundle.clone()],
        }),
        DeployMode::Production => {
            let manifest = read_manifest(&config.manifest_path).await?;
            Ok(AssetRefs {
                stylesheets: vec![manifest_entry(&manifest, MANIFEST_CSS_KEY, &config.manifest_path)?],
                scripts: vec![manifest_entry(&manifest, MANIFEST_JS_KEY, &config.manifest_path)?],
            })
        }
    }
}

async fn read_manifest(path: &str) -> Result<HashMap<String, String>, SsrError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SsrError::Manifest {
            path: path.to_string(),
            error: e.to_string(),
        })?;

    serde_json::from_str(&content).map_err(|e| SsrError::Manifest {
        path: path.to_string(),
        error: e.to_string(),
    })
}

fn manifest_entry(
    manifest: &HashMap<String, String>,
    key: &str,
    path: &str,
) -> Result<String, SsrError> {
    manifest.get(key).cloned().ok_or_else(|| SsrError::Manifest {
        path: path.to_string(),
        error: format!("missing key {:?}", key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_development_assets_fixed() {
        let config = AssetsConfig::default();
        let assets = select_assets(DeployMode::Development, &config).await.unwrap();

        assert!(assets.stylesheets.is_empty());
        assert_eq!(assets.scripts, vec!["/static/js/bundle.js".to_string()]);
    }

    #[tokio::test]
    async fn test_development_ignores_manifest() {
        // Manifest path does not exist; development must not touch it.
        let config = AssetsConfig {
            manifest_path: "/nonexistent/asset-manifest.json".to_string(),
            ..Default::default()
        };
        assert!(select_assets(DeployMode::Development, &config).await.is_ok());
    }

    #[tokio::test]
    async fn test_production_reads_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"app.css": "app.a1b2.css", "app.js": "app.c3d4.js"}}"#
        )
        .unwrap();

        let config = AssetsConfig {
            manifest_path: file.path().to_string_lossy().to_string(),
            ..Default::default()
        };
        let assets = select_assets(DeployMode::Production, &config).await.unwrap();

        assert_eq!(assets.stylesheets, vec!["app.a1b2.css".to_string()]);
        assert_eq!(assets.scripts, vec!["app.c3d4.js".to_string()]);
    }

    #[tokio::test]
    async fn test_production_missing_manifest_is_error() {
        let config = AssetsConfig {
            manifest_path: "/nonexistent/asset-manifest.json".to_string(),
            ..Default::default()
        };
        let err = select_assets(DeployMode::Production, &config).await.unwrap_err();
        assert!(matches!(err, SsrError::Manifest { .. }));
    }

    #[tokio::test]
    async fn test_production_missing_key_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"app.css": "app.a1b2.css"}}"#).unwrap();

        let config = AssetsConfig {
            manifest_path: file.path().to_string_lossy().to_string(),
            ..Default::default()
        };
        let err = select_assets(DeployMode::Production, &config).await.unwrap_err();
        assert!(matches!(err, SsrError::Manifest { .. }));
    }
}
