//! Writes rendered files to the output directory.

use super::OutputFile;
use crate::error::RouteError;
use std::path::{Path, PathBuf};

/// Write each file under `dir`, overwriting existing ones, in order.
///
/// Stops at the first failure; files already written are left in place.
pub fn write_output_files(dir: &Path, files: &[OutputFile]) -> Result<Vec<PathBuf>, RouteError> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(file.name);
        std::fs::write(&path, &file.contents).map_err(|source| {
            log::error!("Error writing {}: {source}", path.display());
            RouteError::Output {
                path: path.clone(),
                source,
            }
        })?;
        log::info!("Wrote {} ({} bytes)", path.display(), file.contents.len());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chnroutes-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Error creating scratch dir");
        dir
    }

    #[test]
    fn test_write_and_overwrite() {
        let dir = scratch_dir("writer");
        let files = vec![OutputFile {
            name: "routes.txt",
            contents: "first\n".to_string(),
        }];
        write_output_files(&dir, &files).expect("write failed");

        let files = vec![OutputFile {
            name: "routes.txt",
            contents: "second\n".to_string(),
        }];
        let paths = write_output_files(&dir, &files).expect("write failed");
        assert_eq!(paths, vec![dir.join("routes.txt")]);
        assert_eq!(
            std::fs::read_to_string(&paths[0]).unwrap(),
            "second\n",
            "existing file should be replaced"
        );
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = std::env::temp_dir().join(format!("chnroutes-missing-{}", std::process::id()));
        let files = vec![OutputFile {
            name: "routes.txt",
            contents: String::new(),
        }];
        let err = write_output_files(&dir.join("nope"), &files).unwrap_err();
        assert!(matches!(err, RouteError::Output { .. }));
    }
}
