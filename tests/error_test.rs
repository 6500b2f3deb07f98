use curlpost::{CurlpostError, Result};
use std::path::PathBuf;

#[test]
fn test_fixture_root_missing() {
    let err = CurlpostError::FixtureRootMissing(PathBuf::from("keploy"));
    assert_eq!(err.to_string(), "fixture 目录不存在: keploy");
}

#[test]
fn test_config_error() {
    let err = CurlpostError::ConfigError("bad key".to_string());
    assert_eq!(err.to_string(), "配置错误: bad key");
}

#[test]
fn test_error_conversion_from_toml() {
    let toml_err = toml::from_str::<toml::Table>("key = [").unwrap_err();
    let err: CurlpostError = toml_err.into();
    assert!(matches!(err, CurlpostError::ConfigError(_)));
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<()> {
        Err(CurlpostError::ConfigError("test".to_string()))
    }

    match returns_error() {
        Err(CurlpostError::ConfigError(msg)) => assert_eq!(msg, "test"),
        _ => panic!("Expected ConfigError"),
    }
}
