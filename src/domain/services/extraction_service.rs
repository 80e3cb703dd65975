use scraper::{Html, Selector};
use serde_json::{Map, Value};

use crate::domain::models::crawl_task::SelectorSpec;

/// 提取服务
///
/// 负责从HTML内容中按选择器列表提取命名字段。
/// 每个选择器独立求值：单个选择器的解析失败只影响它自己的字段，
/// 不会中止整次提取。
pub struct ExtractionService;

impl ExtractionService {
    /// 提取数据
    ///
    /// # 参数
    ///
    /// * `html_content` - 原始HTML内容
    /// * `selectors` - 选择器列表
    ///
    /// # 返回值
    ///
    /// 以选择器名称为键的JSON对象。每个字段三选一：
    /// 字符串数组（按文档顺序的匹配文本）、null（无匹配）、
    /// 字符串（该选择器的错误信息）。
    pub fn extract(html_content: &str, selectors: &[SelectorSpec]) -> Value {
        let document = Html::parse_document(html_content);
        let mut result = Map::new();

        for spec in selectors {
            let coerced = coerce_selector(&spec.selector);
            let outcome = match Selector::parse(&coerced) {
                Ok(selector) => {
                    let texts: Vec<Value> = document
                        .select(&selector)
                        .map(|element| {
                            // Each text node is trimmed on its own, so nested
                            // inline markup does not produce doubled whitespace
                            let text = element
                                .text()
                                .map(str::trim)
                                .filter(|fragment| !fragment.is_empty())
                                .collect::<Vec<_>>()
                                .join(" ");
                            Value::String(text)
                        })
                        .collect();

                    if texts.is_empty() {
                        Value::Null
                    } else {
                        Value::Array(texts)
                    }
                }
                Err(e) => Value::String(format!("selector parse error: {}", e)),
            };

            result.insert(spec.name.clone(), outcome);
        }

        Value::Object(result)
    }
}

/// 将路径风格的选择器强制转换为简化CSS形式
///
/// 配置格式沿用原始工具的xpath字段，执行时按以下规则降级处理：
/// 每个"//"替换为空格（后代组合器），所有"@"删除。
/// 该强转与原始工具逐字节兼容，不等价于任何标准XPath求值。
fn coerce_selector(selector: &str) -> String {
    selector.replace("//", " ").replace('@', "").trim().to_string()
}
