use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::error::CurlpostError;

/// 遍历 fixture 根目录
///
/// 目录结构：`<root>/<*test-set*>/tests/*.yaml`
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    /// 测试集目录名中必须包含的子串
    const TEST_SET_MARKER: &'static str = "test-set";
    const TESTS_DIR: &'static str = "tests";
    const EXTENSIONS: [&'static str; 2] = ["yaml", "yml"];

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 按发现顺序列出所有候选 fixture 文件
    ///
    /// 根目录不存在或无法读取是致命错误；单个测试集下没有 `tests` 目录或读取失败只记录日志。
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(CurlpostError::FixtureRootMissing(self.root.clone()));
        }

        let mut fixtures = Vec::new();

        for test_set in Self::sorted_entries(&self.root)? {
            let is_test_set = test_set
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.contains(Self::TEST_SET_MARKER));
            if !is_test_set || !test_set.is_dir() {
                continue;
            }

            let tests_dir = test_set.join(Self::TESTS_DIR);
            if !tests_dir.is_dir() {
                tracing::info!(test_set = %test_set.display(), "No 'tests' subfolder, skipping");
                continue;
            }

            let files = match Self::sorted_entries(&tests_dir) {
                Ok(files) => files,
                Err(e) => {
                    tracing::warn!(dir = %tests_dir.display(), error = %e, "Failed to read 'tests' directory");
                    continue;
                }
            };

            fixtures.extend(
                files
                    .into_iter()
                    .filter(|path| path.is_file() && Self::is_fixture_file(path)),
            );
        }

        tracing::debug!(root = %self.root.display(), count = fixtures.len(), "Fixtures discovered");
        Ok(fixtures)
    }

    fn is_fixture_file(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| Self::EXTENSIONS.iter().any(|ext| *ext == e))
    }

    /// 目录项按文件名排序，保证输出顺序稳定
    fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            entries.push(entry?.path());
        }
        entries.sort();
        Ok(entries)
    }
}
