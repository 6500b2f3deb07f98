use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Result;
use crate::collection::CollectionInfo;
use crate::error::CurlpostError;

/// 转换配置
///
/// 所有字段都有默认值；配置文件中只需写出要覆盖的项。相对路径相对于当前工作目录。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// fixture 根目录
    pub fixture_dir: PathBuf,

    /// 输出文件
    pub output: PathBuf,

    /// 集合元信息
    pub collection: CollectionInfo,
}

impl ConvertConfig {
    pub const DEFAULT_FIXTURE_DIR: &'static str = "keploy";
    pub const DEFAULT_OUTPUT: &'static str = "output.json";
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            fixture_dir: PathBuf::from(Self::DEFAULT_FIXTURE_DIR),
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
            collection: CollectionInfo::default(),
        }
    }
}

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    const CONFIG_FILE: &'static str = "curlpost.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ConvertConfig> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CurlpostError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// 从 `start` 开始逐级向上查找配置文件
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.is_file() {
                return Some(config_path);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// 加载配置
    ///
    /// 显式指定的文件优先；否则从 `cwd` 向上查找；都没有时使用默认值。
    /// 找到了但无法解析的配置文件视为致命错误。
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<ConvertConfig> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_from(cwd),
        };

        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Self::load_from_path(&path)
            }
            None => Ok(ConvertConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.fixture_dir, PathBuf::from("keploy"));
        assert_eq!(config.output, PathBuf::from("output.json"));
        assert_eq!(config.collection.name, "Atlantis");
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("curlpost.toml");
        fs::write(
            &path,
            r#"
output = "collection.json"

[collection]
name = "Orders"
_postman_id = "fixed-id"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.fixture_dir, PathBuf::from("keploy"));
        assert_eq!(config.output, PathBuf::from("collection.json"));
        assert_eq!(config.collection.name, "Orders");
        assert_eq!(config.collection.postman_id, "fixed-id");
        assert_eq!(
            config.collection.schema,
            CollectionInfo::DEFAULT_SCHEMA.to_string()
        );
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("curlpost.toml");
        fs::write(&path, "output = [").unwrap();

        let err = ConfigLoader::load_from_path(&path).unwrap_err();
        assert!(matches!(err, CurlpostError::ConfigError(_)));
    }

    #[test]
    fn test_find_in_parent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("curlpost.toml"), "fixture_dir = \"fx\"\n").unwrap();

        let config = ConfigLoader::load(None, &nested).unwrap();
        assert_eq!(config.fixture_dir, PathBuf::from("fx"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigLoader::load(Some(&temp_dir.path().join("nope.toml")), temp_dir.path());
        assert!(result.is_err());
    }
}
