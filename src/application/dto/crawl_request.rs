// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::crawl_task::{CrawlConfig, SelectorSpec};

/// 爬取请求DTO
///
/// POST /start 的请求体，字段名与原始JSON格式保持一致。
/// auto_discovery、max_depth 和 concurrency 会被接受并记录在
/// 任务快照中，但核心逻辑不使用它们。
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CrawlRequestDto {
    /// 目标URL
    #[validate(length(min = 1, message = "target_url cannot be empty"))]
    pub target_url: String,
    /// 选择器列表
    #[serde(default)]
    pub xpath_selectors: Vec<SelectorDto>,
    /// 自动发现开关
    #[serde(default)]
    pub auto_discovery: bool,
    /// 最大爬取深度
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// 并发提示
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,
}

/// 选择器DTO
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SelectorDto {
    /// 字段名称
    pub name: String,
    /// 选择器表达式
    pub xpath: String,
}

fn default_max_depth() -> u32 {
    2
}

fn default_concurrency() -> u32 {
    3
}

impl CrawlRequestDto {
    /// 转换为领域配置
    pub fn into_config(self) -> CrawlConfig {
        CrawlConfig {
            target_url: self.target_url,
            selectors: self
                .xpath_selectors
                .into_iter()
                .map(|s| SelectorSpec {
                    name: s.name,
                    selector: s.xpath,
                })
                .collect(),
            auto_discovery: self.auto_discovery,
            max_depth: self.max_depth,
            concurrency: self.concurrency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let dto: CrawlRequestDto = serde_json::from_str(
            r#"{"target_url": "https://example.com", "xpath_selectors": [{"name": "title", "xpath": "title"}]}"#,
        )
        .unwrap();

        assert!(!dto.auto_discovery);
        assert_eq!(dto.max_depth, 2);
        assert_eq!(dto.concurrency, 3);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_empty_target_url_fails_validation() {
        let dto: CrawlRequestDto =
            serde_json::from_str(r#"{"target_url": "", "xpath_selectors": []}"#).unwrap();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_into_config_preserves_selector_order() {
        let dto: CrawlRequestDto = serde_json::from_str(
            r#"{
                "target_url": "https://example.com",
                "xpath_selectors": [
                    {"name": "first", "xpath": "h1"},
                    {"name": "second", "xpath": "h2"}
                ]
            }"#,
        )
        .unwrap();

        let config = dto.into_config();
        assert_eq!(config.selectors.len(), 2);
        assert_eq!(config.selectors[0].name, "first");
        assert_eq!(config.selectors[1].selector, "h2");
    }
}
