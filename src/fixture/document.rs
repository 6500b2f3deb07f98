use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

/// 单个 fixture 的处理错误，只影响当前文件
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("No 'curl' field in {}", path.display())]
    MissingCurl { path: PathBuf },
}

/// fixture 文件中我们关心的部分，其它字段全部忽略
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FixtureDocument {
    /// 缺失或不是字符串时为 None
    #[serde(default, deserialize_with = "string_or_none")]
    pub curl: Option<String>,
}

impl FixtureDocument {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// 读取成功且带有 curl 命令的 fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub path: PathBuf,
    pub curl: String,
}

impl Fixture {
    /// 读取并解码一个 fixture 文件
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document = FixtureDocument::from_yaml(&content).map_err(|source| FixtureError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

        let curl = document.curl.ok_or_else(|| FixtureError::MissingCurl {
            path: path.to_path_buf(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            curl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_document_with_curl() {
        let yaml = r#"
version: api.keploy.io/v1beta1
kind: Http
name: test-1
spec:
  req:
    method: GET
curl: |
  curl --request GET \
    --url http://localhost:8080/users
"#;
        let doc = FixtureDocument::from_yaml(yaml).unwrap();
        assert_eq!(
            doc.curl.as_deref(),
            Some("curl --request GET \\\n  --url http://localhost:8080/users\n")
        );
    }

    #[test]
    fn test_document_without_curl() {
        let doc = FixtureDocument::from_yaml("name: test-2\nkind: Http\n").unwrap();
        assert_eq!(doc.curl, None);
    }

    #[test]
    fn test_curl_with_wrong_type() {
        let doc = FixtureDocument::from_yaml("curl:\n  - a\n  - b\n").unwrap();
        assert_eq!(doc.curl, None);

        let doc = FixtureDocument::from_yaml("curl: 42\n").unwrap();
        assert_eq!(doc.curl, None);
    }

    #[test]
    fn test_load_missing_curl() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"name: no-curl\n").unwrap();
        file.flush().unwrap();

        let err = Fixture::load(file.path()).unwrap_err();
        assert!(matches!(err, FixtureError::MissingCurl { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"curl: [unclosed\n").unwrap();
        file.flush().unwrap();

        let err = Fixture::load(file.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Yaml { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Fixture::load("/nonexistent/test-1.yaml").unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }
}
