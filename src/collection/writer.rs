use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::Result;
use crate::collection::types::Collection;
use crate::error::CurlpostError;

/// 集合文件写入器
pub struct CollectionWriter {
    path: PathBuf,
}

impl CollectionWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 格式化为 JSON，四个空格缩进
    pub fn to_json(collection: &Collection) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        collection.serialize(&mut serializer)?;
        String::from_utf8(buf)
            .map_err(|e| CurlpostError::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// 写入集合
    ///
    /// 先写到同目录的 `.tmp` 文件再重命名为目标文件；任一步失败都会删除临时文件，不留下残缺输出。
    pub fn write(&self, collection: &Collection) -> Result<()> {
        let json = Self::to_json(collection)?;

        let tmp_path = self.tmp_path();
        if let Err(err) = fs::write(&tmp_path, json) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }

        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }

        tracing::debug!(path = %self.path.display(), items = collection.len(), "Collection written");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
