pub mod curl;
pub mod normalize;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use curl::CurlParser;
pub use normalize::normalize;
pub use types::{
    Body, BodyMode, Method, MethodUrlMatch, ParseError, ParseResult, ParsedRequest, QueryParam,
    ResolvedUrl,
};

/// 从原始 curl 命令解析请求
pub fn parse_command(command: &str) -> ParseResult<ParsedRequest> {
    CurlParser::parse(command)
}
