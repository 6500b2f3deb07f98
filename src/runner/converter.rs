use std::path::Path;

use crate::Result;
use crate::collection::{Collection, CollectionWriter, Item};
use crate::config::ConvertConfig;
use crate::fixture::{Fixture, FixtureSource};
use crate::parser::CurlParser;
use crate::runner::types::{ConversionSummary, SkipReason};

/// fixture 目录 → 集合文件 的批处理流程
///
/// 按顺序逐个处理 fixture；单个 fixture 失败只记录并跳过，目录或输出相关的错误直接返回。
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// 构建集合但不写文件
    pub fn convert(&self) -> Result<(Collection, ConversionSummary)> {
        let source = FixtureSource::new(&self.config.fixture_dir);
        let paths = source.discover()?;

        let mut collection = Collection::new(self.config.collection.clone());
        let mut summary = ConversionSummary::new(paths.len());

        for path in paths {
            match Self::convert_one(&path) {
                Ok(item) => {
                    tracing::debug!(path = %path.display(), name = %item.name, "Fixture converted");
                    collection.push(item);
                    summary.record_converted();
                }
                Err(reason) => {
                    tracing::warn!(path = %path.display(), "Skipping fixture: {}", reason);
                    summary.record_skipped(path, reason);
                }
            }
        }

        Ok((collection, summary))
    }

    /// 构建集合并写入配置的输出文件
    pub fn run(&self) -> Result<ConversionSummary> {
        let (collection, mut summary) = self.convert()?;

        let writer = CollectionWriter::new(&self.config.output);
        writer.write(&collection)?;
        summary.output = Some(writer.path().to_path_buf());

        tracing::info!(
            output = %writer.path().display(),
            converted = summary.converted,
            skipped = summary.skipped_count(),
            "Collection written"
        );
        Ok(summary)
    }

    /// 读取 → 解析 → 构建；失败原因交给调用方记录
    fn convert_one(path: &Path) -> std::result::Result<Item, SkipReason> {
        let fixture = Fixture::load(path)?;
        let parsed = CurlParser::parse(&fixture.curl)?;
        Ok(parsed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurlpostError;
    use crate::fixture::FixtureError;
    use crate::parser::ParseError;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> ConvertConfig {
        ConvertConfig {
            fixture_dir: root.join("keploy"),
            output: root.join("output.json"),
            ..ConvertConfig::default()
        }
    }

    #[test]
    fn test_convert_mixed_fixtures() {
        let temp_dir = TempDir::new().unwrap();
        let tests = temp_dir.path().join("keploy/test-set-0/tests");
        fs::create_dir_all(&tests).unwrap();
        fs::write(
            tests.join("test-1.yaml"),
            "curl: curl --request GET --url localhost:8080/users\n",
        )
        .unwrap();
        fs::write(tests.join("test-2.yaml"), "name: no-curl\n").unwrap();
        fs::write(tests.join("test-3.yaml"), "curl: \"curl --header 'X: Y'\"\n").unwrap();

        let converter = Converter::new(config_for(temp_dir.path()));
        let (collection, summary) = converter.convert().unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.items[0].name, "users");
        assert_eq!(summary.discovered, 3);
        assert_eq!(summary.converted, 1);
        assert_eq!(summary.skipped_count(), 2);
        assert!(matches!(
            summary.skipped[0].reason,
            SkipReason::Fixture(FixtureError::MissingCurl { .. })
        ));
        assert!(matches!(
            summary.skipped[1].reason,
            SkipReason::Parse(ParseError::MissingHost { .. })
        ));
    }

    #[test]
    fn test_run_without_fixture_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(temp_dir.path());
        let output = config.output.clone();

        let err = Converter::new(config).run().unwrap_err();
        assert!(matches!(err, CurlpostError::FixtureRootMissing(_)));
        assert!(!output.exists());
    }
}
