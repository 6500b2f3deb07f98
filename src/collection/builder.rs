use crate::collection::types::{
    Item, ItemBody, ItemRequest, ItemUrl, KeyValue, ProtocolProfileBehavior,
};
use crate::parser::ParsedRequest;

/// 将 ParsedRequest 转换为集合条目
///
/// 总是关闭 body 裁剪，这样 GET/DELETE 等方法的 body 也会被保留。
impl From<ParsedRequest> for Item {
    fn from(parsed: ParsedRequest) -> Self {
        let header = parsed
            .headers
            .into_iter()
            .map(|(key, value)| KeyValue { key, value })
            .collect();

        let url = ItemUrl {
            raw: parsed.url.raw,
            protocol: parsed.url.scheme,
            host: vec![parsed.url.host],
            port: parsed.url.port,
            path: parsed.url.path,
            query: parsed
                .url
                .query
                .into_iter()
                .map(|q| KeyValue {
                    key: q.key,
                    value: q.value,
                })
                .collect(),
        };

        Item {
            name: parsed.name,
            protocol_profile_behavior: ProtocolProfileBehavior {
                disable_body_pruning: true,
            },
            request: ItemRequest {
                method: parsed.method.as_str().to_string(),
                header,
                body: ItemBody {
                    mode: parsed.body.mode.as_str().to_string(),
                    raw: parsed.body.raw,
                },
                url,
            },
            response: Vec::new(),
        }
    }
}

/// 便捷函数：从 ParsedRequest 构建集合条目
pub fn build_item(parsed: ParsedRequest) -> Item {
    parsed.into()
}
