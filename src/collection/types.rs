use serde::{Deserialize, Serialize};

/// 集合元信息，全部为常量默认值，可通过配置文件覆盖
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionInfo {
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    pub name: String,
    pub schema: String,
    #[serde(rename = "_exporter_id")]
    pub exporter_id: String,
}

impl CollectionInfo {
    pub const DEFAULT_POSTMAN_ID: &'static str = "b8623e1b69-224e-4ff3-801c-a95d480859bd";
    pub const DEFAULT_NAME: &'static str = "Atlantis";
    pub const DEFAULT_SCHEMA: &'static str =
        "https://schema.getpostman.com/json/collection/v2.0.0/collection.json";
    pub const DEFAULT_EXPORTER_ID: &'static str = "132182772";
}

impl Default for CollectionInfo {
    fn default() -> Self {
        Self {
            postman_id: Self::DEFAULT_POSTMAN_ID.to_string(),
            name: Self::DEFAULT_NAME.to_string(),
            schema: Self::DEFAULT_SCHEMA.to_string(),
            exporter_id: Self::DEFAULT_EXPORTER_ID.to_string(),
        }
    }
}

/// 输出的集合文档
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub info: CollectionInfo,
    #[serde(rename = "item")]
    pub items: Vec<Item>,
}

impl Collection {
    pub fn new(info: CollectionInfo) -> Self {
        Self {
            info,
            items: Vec::new(),
        }
    }

    /// 追加一个条目，顺序即发现顺序
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub protocol_profile_behavior: ProtocolProfileBehavior,
    pub request: ItemRequest,
    /// 不记录响应，始终为空
    pub response: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolProfileBehavior {
    pub disable_body_pruning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRequest {
    pub method: String,
    pub header: Vec<KeyValue>,
    pub body: ItemBody,
    pub url: ItemUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemBody {
    pub mode: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemUrl {
    pub raw: String,
    pub protocol: String,
    pub host: Vec<String>,
    pub port: String,
    pub path: Vec<String>,
    pub query: Vec<KeyValue>,
}
