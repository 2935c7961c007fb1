use crate::core::Storage;
use crate::utils::error::Result;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    skipped_dirs: Vec<PathBuf>,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            skipped_dirs: Vec::new(),
        }
    }

    /// Leaves `dir` (and everything below it) out of `list_files`.
    pub fn skipping(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skipped_dirs.push(dir.into());
        self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    /// 遞迴尋找檔名以 `suffix` 結尾的檔案，略過隱藏目錄；
    /// 不套用 .gitignore，因為 collector 的輸出通常在被忽略的 target/ 底下
    fn list_files(&self, suffix: &str) -> Result<Vec<String>> {
        let mut files = Vec::new();

        // 尚不存在的目錄無法 canonicalize，也不會有檔案
        let skipped: Vec<PathBuf> = self
            .skipped_dirs
            .iter()
            .filter_map(|dir| fs::canonicalize(dir).ok())
            .collect();

        let mut builder = WalkBuilder::new(&self.base_path);
        builder.standard_filters(false).hidden(true);
        if !skipped.is_empty() {
            builder.filter_entry(move |entry| {
                if !entry.file_type().is_some_and(|t| t.is_dir()) {
                    return true;
                }
                fs::canonicalize(entry.path())
                    .map(|dir| !skipped.contains(&dir))
                    .unwrap_or(true)
            });
        }

        for entry in builder.build() {
            let entry = entry.map_err(std::io::Error::other)?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.path();
            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(suffix));
            if !matches {
                continue;
            }

            let relative = path.strip_prefix(&self.base_path).unwrap_or(path);
            tracing::debug!("Found {}", relative.display());
            files.push(relative.to_string_lossy().into_owned());
        }

        files.sort();
        Ok(files)
    }

    fn location(&self) -> String {
        self.base_path.display().to_string()
    }
}

/// Walks up from `start` while the parent directory still holds `marker`,
/// returning the outermost such directory (the top of a multi-module build).
pub fn find_project_root(start: &Path, marker: &str) -> Result<PathBuf> {
    let mut root = fs::canonicalize(start)?;
    while let Some(parent) = root.parent() {
        if !parent.join(marker).exists() {
            break;
        }
        root = parent.to_path_buf();
    }
    Ok(root)
}
