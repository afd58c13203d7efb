use crate::model::{MatchGroup, OutputError};
use std::path::{Path, PathBuf};
use tracing::info;

/// Serializes one group per line.
pub fn render_results(groups: &[MatchGroup]) -> Result<String, OutputError> {
    let mut out = String::new();
    for group in groups {
        out.push_str(&serde_json::to_string(group)?);
        out.push('\n');
    }
    Ok(out)
}

/// Writes all groups to `path`. Content is staged in a sibling temp file and
/// renamed into place, so readers never see a half-written result set.
pub async fn write_results(path: &Path, groups: &[MatchGroup]) -> Result<(), OutputError> {
    let content = render_results(groups)?;
    let staging = staging_path(path);

    tokio::fs::write(&staging, content)
        .await
        .map_err(|source| OutputError::Io {
            path: staging.clone(),
            source,
        })?;
    if let Err(source) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(OutputError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    info!("Wrote {} results to {}", groups.len(), path.display());
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Listing;

    fn group() -> MatchGroup {
        MatchGroup {
            product_name: "sony_dsc-w310".into(),
            listings: vec![Listing {
                title: "sony dsc-w310 camera".into(),
                manufacturer: "sony".into(),
                currency: "cad".into(),
                price: "99.99".into(),
            }],
        }
    }

    #[test]
    fn renders_one_line_per_group() {
        let text = render_results(&[group(), MatchGroup::empty("acme_x1")]).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"product_name":"sony_dsc-w310","listings":[{"title":"sony dsc-w310 camera","manufacturer":"sony","currency":"cad","price":"99.99"}]}"#,
                "\n",
                r#"{"product_name":"acme_x1","listings":[]}"#,
                "\n"
            )
        );
    }

    #[tokio::test]
    async fn writes_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        write_results(&path, &[group()]).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(!dir.path().join("results.txt.tmp").exists());
    }

    #[tokio::test]
    async fn unwritable_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("results.txt");
        let err = write_results(&path, &[group()]).await.unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
        assert!(!path.exists());
    }
}
