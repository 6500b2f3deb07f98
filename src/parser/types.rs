use std::fmt;
use std::str::FromStr;

/// HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl FromStr for Method {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(ParseError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 请求体模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    #[default]
    None,
    Raw,
}

impl BodyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyMode::None => "none",
            BodyMode::Raw => "raw",
        }
    }
}

/// 请求体：模式 + 原始内容（不做任何重新编码）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    pub mode: BodyMode,
    pub raw: String,
}

impl Body {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            mode: BodyMode::Raw,
            raw: content.into(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.mode == BodyMode::None
    }
}

/// 单个查询参数；同一个 key 出现多次时每次各占一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

/// URL 拆解结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    /// 规范化后的完整 URL
    pub raw: String,
    pub scheme: String,
    /// 永不为空
    pub host: String,
    /// 未显式指定或为默认端口时为空
    pub port: String,
    pub path: Vec<String>,
    pub query: Vec<QueryParam>,
}

/// 方法 + URL 提取器的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodUrlMatch {
    Found { method: String, url: String },
    NoMatch,
}

/// 单个解析后的 curl 请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// 显示名称
    pub name: String,

    /// HTTP 方法，缺失时为 GET
    pub method: Method,

    /// Headers 列表，保持原始顺序，重复的 key 不去重
    pub headers: Vec<(String, String)>,

    pub body: Body,

    pub url: ResolvedUrl,
}

impl ParsedRequest {
    /// 缺少路径时使用的名称
    pub const DEFAULT_NAME: &'static str = "Generated from Curl";

    /// 从 URL 拆解结果派生名称：最后一个非空路径段
    pub fn derive_name(url: &ResolvedUrl) -> String {
        url.path
            .iter()
            .rev()
            .find(|segment| !segment.is_empty())
            .cloned()
            .unwrap_or_else(|| Self::DEFAULT_NAME.to_string())
    }
}

/// 解析错误类型
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// URL 没有主机名（包括完全没有找到 URL 的情况）
    #[error("URL '{url}' has no hostname")]
    MissingHost { url: String },

    /// URL 无法解析
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// 无效的 HTTP 方法
    #[error("Invalid HTTP method '{method}'")]
    InvalidMethod { method: String },
}

/// 解析结果类型别名
pub type ParseResult<T> = Result<T, ParseError>;
