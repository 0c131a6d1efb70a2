use crate::core::{NormalizedItem, RequestKind, SlugRequest, UpstreamEntry};
use crate::utils::error::{GatewayError, Result};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://www.healthcare.gov";

/// 決定保留哪些上游欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapper {
    pub keep_date: bool,
    pub keep_details: bool,
}

impl Mapper {
    pub const GLOSSARY_ENTRY: Mapper = Mapper {
        keep_date: true,
        keep_details: true,
    };
    pub const ARTICLE_ENTRY: Mapper = Mapper {
        keep_date: false,
        keep_details: true,
    };
    pub const GLOSSARY_SUMMARY: Mapper = Mapper {
        keep_date: true,
        keep_details: false,
    };
    pub const ARTICLE_SUMMARY: Mapper = Mapper {
        keep_date: false,
        keep_details: false,
    };

    pub fn apply(&self, raw: &Value) -> Result<NormalizedItem> {
        let entry = UpstreamEntry::read(raw, self)?;
        self.map_entry(entry)
    }

    pub fn map_entry(&self, entry: UpstreamEntry) -> Result<NormalizedItem> {
        let slug = required("url", entry.url)?;
        let title = required("title", entry.title)?;
        let lang = required("lang", entry.lang)?;

        let (meta_title, meta_description, excerpt, content) = if self.keep_details {
            (
                entry.meta_title,
                entry.meta_description,
                entry.excerpt,
                entry.content,
            )
        } else {
            (None, None, None, None)
        };

        Ok(NormalizedItem {
            slug,
            title,
            lang,
            date: if self.keep_date { entry.date } else { None },
            meta_title,
            meta_description,
            excerpt,
            content,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GatewayError::payload(format!(
            "upstream entry is missing required field '{}'",
            field
        ))),
    }
}

impl UpstreamEntry {
    /// 只讀取 mapper 會保留的欄位，其餘欄位的型別不影響結果
    fn read(raw: &Value, mapper: &Mapper) -> Result<Self> {
        let object = raw.as_object().ok_or_else(|| {
            GatewayError::payload(format!("expected an object entry, got {}", raw))
        })?;

        let text = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| object.get(*key).and_then(Value::as_str))
                .map(str::to_string)
        };
        let detail = |keys: &[&str]| if mapper.keep_details { text(keys) } else { None };

        Ok(Self {
            url: text(&["url"]),
            title: text(&["title"]),
            lang: text(&["lang"]),
            date: if mapper.keep_date { text(&["date"]) } else { None },
            meta_title: detail(&["meta-title", "metaTitle"]),
            meta_description: detail(&["meta-description", "metaDescription"]),
            excerpt: detail(&["excerpt"]),
            content: detail(&["content"]),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub url: String,
    pub mapper: Mapper,
    /// 清單所在的屬性名稱；單筆請求為 None
    pub property_name: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct RequestConfigurator {
    base_url: String,
}

impl Default for RequestConfigurator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl RequestConfigurator {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 無法辨識的 (slug, kind) 組合回傳 None，由呼叫端轉成 400
    pub fn configure(&self, slug: Option<&SlugRequest>, kind: RequestKind) -> Option<RequestConfig> {
        match (slug, kind) {
            (Some(slug), RequestKind::Glossary) => Some(RequestConfig {
                url: self.item_url(slug),
                mapper: Mapper::GLOSSARY_ENTRY,
                property_name: None,
            }),
            (Some(slug), RequestKind::Article) => Some(RequestConfig {
                url: self.item_url(slug),
                mapper: Mapper::ARTICLE_ENTRY,
                property_name: None,
            }),
            (None, RequestKind::Glossaries) => Some(RequestConfig {
                url: format!("{}/api/glossary.json", self.base_url),
                mapper: Mapper::GLOSSARY_SUMMARY,
                property_name: Some("glossary"),
            }),
            (None, RequestKind::Articles) => Some(RequestConfig {
                url: format!("{}/api/articles.json", self.base_url),
                mapper: Mapper::ARTICLE_SUMMARY,
                property_name: Some("articles"),
            }),
            _ => None,
        }
    }

    fn item_url(&self, slug: &SlugRequest) -> String {
        format!("{}/{}/{}.json", self.base_url, slug.base, slug.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_entry() -> Value {
        json!({
            "url": "/glossary/premium/",
            "title": "Premium",
            "lang": "en",
            "date": "2021-03-01",
            "meta-title": "Premium - Glossary",
            "meta-description": "The amount you pay",
            "excerpt": "Short",
            "content": "<p>Long</p>",
            "categories": ["costs"]
        })
    }

    #[test]
    fn test_single_item_urls() {
        let configurator = RequestConfigurator::new("https://example.com/");
        let slug = SlugRequest::new("glossary", "premium");

        let config = configurator
            .configure(Some(&slug), RequestKind::Glossary)
            .unwrap();
        assert_eq!(config.url, "https://example.com/glossary/premium.json");
        assert_eq!(config.mapper, Mapper::GLOSSARY_ENTRY);
        assert!(config.property_name.is_none());

        let config = configurator
            .configure(Some(&SlugRequest::new("blog", "open-enrollment")), RequestKind::Article)
            .unwrap();
        assert_eq!(config.url, "https://example.com/blog/open-enrollment.json");
        assert_eq!(config.mapper, Mapper::ARTICLE_ENTRY);
    }

    #[test]
    fn test_list_urls() {
        let configurator = RequestConfigurator::default();

        let config = configurator.configure(None, RequestKind::Glossaries).unwrap();
        assert_eq!(config.url, "https://www.healthcare.gov/api/glossary.json");
        assert_eq!(config.property_name, Some("glossary"));

        let config = configurator.configure(None, RequestKind::Articles).unwrap();
        assert_eq!(config.url, "https://www.healthcare.gov/api/articles.json");
        assert_eq!(config.property_name, Some("articles"));
    }

    #[test]
    fn test_unrecognized_combinations() {
        let configurator = RequestConfigurator::default();
        let slug = SlugRequest::new("glossary", "premium");

        assert!(configurator.configure(Some(&slug), RequestKind::Glossaries).is_none());
        assert!(configurator.configure(Some(&slug), RequestKind::Articles).is_none());
        assert!(configurator.configure(None, RequestKind::Glossary).is_none());
        assert!(configurator.configure(None, RequestKind::Article).is_none());
    }

    #[test]
    fn test_glossary_entry_keeps_all_fields() {
        let item = Mapper::GLOSSARY_ENTRY.apply(&full_entry()).unwrap();
        assert_eq!(item.slug, "/glossary/premium/");
        assert_eq!(item.date.as_deref(), Some("2021-03-01"));
        assert_eq!(item.meta_title.as_deref(), Some("Premium - Glossary"));
        assert_eq!(item.meta_description.as_deref(), Some("The amount you pay"));
        assert_eq!(item.excerpt.as_deref(), Some("Short"));
        assert_eq!(item.content.as_deref(), Some("<p>Long</p>"));
    }

    #[test]
    fn test_article_entry_drops_date() {
        let item = Mapper::ARTICLE_ENTRY.apply(&full_entry()).unwrap();
        assert!(item.date.is_none());
        assert_eq!(item.excerpt.as_deref(), Some("Short"));
    }

    #[test]
    fn test_summaries_keep_only_list_fields() {
        let glossary = Mapper::GLOSSARY_SUMMARY.apply(&full_entry()).unwrap();
        assert_eq!(glossary.date.as_deref(), Some("2021-03-01"));
        assert!(glossary.meta_title.is_none());
        assert!(glossary.content.is_none());

        let article = Mapper::ARTICLE_SUMMARY.apply(&full_entry()).unwrap();
        assert!(article.date.is_none());
        assert!(article.excerpt.is_none());
        assert_eq!(article.title, "Premium");
    }

    #[test]
    fn test_missing_required_fields_are_rejected() {
        let missing_url = json!({"title": "T", "lang": "en"});
        assert!(matches!(
            Mapper::ARTICLE_SUMMARY.apply(&missing_url),
            Err(GatewayError::PayloadError { .. })
        ));

        let empty_lang = json!({"url": "a", "title": "T", "lang": ""});
        assert!(Mapper::ARTICLE_SUMMARY.apply(&empty_lang).is_err());

        assert!(Mapper::ARTICLE_SUMMARY.apply(&json!("not an object")).is_err());
    }

    #[test]
    fn test_null_optionals_are_absent() {
        let entry = json!({"url": "a", "title": "T", "lang": "es", "date": null, "excerpt": null});
        let item = Mapper::GLOSSARY_ENTRY.apply(&entry).unwrap();
        assert!(item.date.is_none());
        assert!(item.excerpt.is_none());
    }

    #[test]
    fn test_meta_fields_accept_hyphenated_and_camel_case() {
        let hyphenated = json!({"url": "a", "title": "T", "lang": "en", "meta-title": "MT", "meta-description": "MD"});
        let item = Mapper::ARTICLE_ENTRY.apply(&hyphenated).unwrap();
        assert_eq!(item.meta_title.as_deref(), Some("MT"));
        assert_eq!(item.meta_description.as_deref(), Some("MD"));

        let camel = json!({"url": "a", "title": "T", "lang": "en", "metaTitle": "MT", "unknown": 1});
        let item = Mapper::ARTICLE_ENTRY.apply(&camel).unwrap();
        assert_eq!(item.meta_title.as_deref(), Some("MT"));
    }

    #[test]
    fn test_summaries_ignore_non_string_unused_fields() {
        let entry = json!({
            "url": "a",
            "title": "T",
            "lang": "en",
            "date": "2020",
            "content": {"html": "<p/>"},
            "excerpt": 5,
            "meta-title": ["x"]
        });

        let item = Mapper::GLOSSARY_SUMMARY.apply(&entry).unwrap();
        assert_eq!(item.slug, "a");
        assert_eq!(item.date.as_deref(), Some("2020"));
        assert!(item.content.is_none());

        let item = Mapper::GLOSSARY_ENTRY.apply(&entry).unwrap();
        assert!(item.excerpt.is_none());
        assert!(item.meta_title.is_none());
    }
}
