use crate::parser::types::{ParseError, ParseResult, QueryParam, ResolvedUrl};

impl ResolvedUrl {
    /// 默认 scheme，当 URL 中未指定 scheme 时使用
    const DEFAULT_SCHEME: &'static str = "http";

    /// 解析 curl 命令中提取出的 URL
    ///
    /// 没有 `scheme://` 前缀时补上 `http://`。主机名为空或 URL 无法解析时返回错误，
    /// 调用方应跳过该条目。
    pub fn resolve(input: &str) -> ParseResult<Self> {
        let input = input.trim();
        let normalized = if has_scheme(input) {
            input.to_string()
        } else {
            format!("{}://{}", Self::DEFAULT_SCHEME, input)
        };

        let parsed = url::Url::parse(&normalized).map_err(|source| match source {
            url::ParseError::EmptyHost => ParseError::MissingHost {
                url: normalized.clone(),
            },
            source => ParseError::InvalidUrl {
                url: normalized.clone(),
                source,
            },
        })?;

        let host = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(ParseError::MissingHost { url: normalized }),
        };

        let trimmed_path = parsed.path().trim_matches('/');
        let path = if trimmed_path.is_empty() {
            Vec::new()
        } else {
            trimmed_path.split('/').map(str::to_string).collect()
        };

        let query = parsed
            .query_pairs()
            .map(|(key, value)| QueryParam {
                key: key.into_owned(),
                value: value.into_owned(),
            })
            .collect();

        Ok(ResolvedUrl {
            raw: parsed.to_string(),
            scheme: parsed.scheme().to_string(),
            host,
            port: parsed.port().map(|p| p.to_string()).unwrap_or_default(),
            path,
            query,
        })
    }
}

/// 判断输入是否以 `scheme://` 开头
fn has_scheme(input: &str) -> bool {
    match input.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
