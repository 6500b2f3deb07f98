use std::sync::OnceLock;

use regex::Regex;

use crate::parser::normalize::normalize;
use crate::parser::types::{
    Body, Method, MethodUrlMatch, ParseResult, ParsedRequest, ResolvedUrl,
};

/// curl 命令解析器
///
/// 只识别固定的几种 flag 形式，不是通用的 shell 解释器。
pub struct CurlParser;

impl CurlParser {
    /// 解析一条原始 curl 命令（可以是多行）
    ///
    /// 找不到 URL 或 URL 没有主机名时返回错误，调用方跳过该条目。
    pub fn parse(command: &str) -> ParseResult<ParsedRequest> {
        let line = normalize(command);

        let (method, url) = match extract_method_url(&line) {
            MethodUrlMatch::Found { method, url } => (method.parse::<Method>()?, url),
            MethodUrlMatch::NoMatch => (Method::Get, String::new()),
        };

        let url = ResolvedUrl::resolve(&url)?;

        Ok(ParsedRequest {
            name: ParsedRequest::derive_name(&url),
            method,
            headers: extract_headers(&line),
            body: extract_body(&line),
            url,
        })
    }
}

/// `--request <M> --url <token>`
fn request_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:^|\s)(?:--request|-X)\s+(\w+)\s+--url\s+('[^']*'|"[^"]*"|\S+)"#).unwrap()
    })
}

/// `--request <M> '<url>'`
fn request_quoted_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)(?:--request|-X)\s+(\w+)\s+'([^']+)'").unwrap())
}

/// `--url <token>`，方法 flag 不紧挨着或不存在
fn url_only_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?:^|\s)--url\s+('[^']*'|"[^"]*"|\S+)"#).unwrap())
}

/// 命令中任意位置的 `--request <M>`
fn method_flag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)(?:--request|-X)\s+(\w+)").unwrap())
}

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)(?:--header|-H)\s+'([^:']*):([^']*)'").unwrap())
}

fn data_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)--data\s+'(\{.*?\})'").unwrap())
}

fn data_raw_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)--data-raw\s+'(\{.*?\})'").unwrap())
}

/// 按顺序尝试两种生成器的方法 + URL 写法，最后退回到单独的 `--url`
///
/// 退回时如果命令中别处有方法 flag，仍使用该方法；完全没有方法 flag 才是 GET。
pub fn extract_method_url(line: &str) -> MethodUrlMatch {
    if let Some(caps) = request_url_regex().captures(line) {
        return MethodUrlMatch::Found {
            method: caps[1].to_uppercase(),
            url: unquote(&caps[2]).to_string(),
        };
    }

    if let Some(caps) = request_quoted_regex().captures(line) {
        return MethodUrlMatch::Found {
            method: caps[1].to_uppercase(),
            url: caps[2].to_string(),
        };
    }

    if let Some(caps) = url_only_regex().captures(line) {
        let method = method_flag_regex()
            .captures(line)
            .map(|m| m[1].to_uppercase())
            .unwrap_or_else(|| Method::Get.as_str().to_string());
        return MethodUrlMatch::Found {
            method,
            url: unquote(&caps[1]).to_string(),
        };
    }

    MethodUrlMatch::NoMatch
}

/// 提取所有 `--header 'Key: Value'`，保持出现顺序
pub fn extract_headers(line: &str) -> Vec<(String, String)> {
    header_regex()
        .captures_iter(line)
        .filter_map(|caps| {
            let key = caps[1].trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), caps[2].trim().to_string()))
        })
        .collect()
}

/// 优先 `--data`，其次 `--data-raw`
pub fn extract_body(line: &str) -> Body {
    data_regex()
        .captures(line)
        .or_else(|| data_raw_regex().captures(line))
        .map(|caps| Body::raw(&caps[1]))
        .unwrap_or_default()
}

/// 去掉成对的外层引号
fn unquote(token: &str) -> &str {
    for quote in ['\'', '"'] {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return &token[1..token.len() - 1];
        }
    }
    token
}
