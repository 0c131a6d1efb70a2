use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 由路徑參數組成的 slug，例如 `/glossary/premium`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlugRequest {
    pub base: String,
    pub item: String,
}

impl SlugRequest {
    pub fn new(base: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            item: item.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Glossary,
    Article,
    Glossaries,
    Articles,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Glossary => "glossary",
            Self::Article => "article",
            Self::Glossaries => "glossaries",
            Self::Articles => "articles",
        }
    }

    /// 單筆請求依 slug 的 base 決定類型
    pub fn for_slug(slug: &SlugRequest) -> Self {
        if slug.base == "glossary" {
            Self::Glossary
        } else {
            Self::Article
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 上游 JSON 的單筆資料；`meta_*` 對應上游的 `meta-title` / `meta-description`
#[derive(Debug, Clone, Default)]
pub struct UpstreamEntry {
    pub url: Option<String>,
    pub title: Option<String>,
    pub lang: Option<String>,
    pub date: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub slug: String,
    pub title: String,
    pub lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// 成功回應：`{ itemsCount, <kind>: [...] }`
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsPayload {
    pub kind: RequestKind,
    pub items: Vec<NormalizedItem>,
}

impl ItemsPayload {
    pub fn new(kind: RequestKind, items: Vec<NormalizedItem>) -> Self {
        Self { kind, items }
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }
}

impl Serialize for ItemsPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("itemsCount", &self.items_count())?;
        map.serialize_entry(self.kind.as_str(), &self.items)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Items(ItemsPayload),
    Message { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: ResponseData,
}

impl ApiResponse {
    pub fn ok(payload: ItemsPayload) -> Self {
        Self {
            status: 200,
            data: ResponseData::Items(payload),
        }
    }

    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            data: ResponseData::Message {
                message: message.into(),
            },
        }
    }
}
