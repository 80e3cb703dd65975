// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// 分页查询参数
///
/// limit 和 page 映射为存储层的 offset/limit 查询，
/// page 从1开始计数。
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// 每页数量，默认10
    pub limit: Option<u64>,
    /// 页码，从1开始，默认1
    pub page: Option<u64>,
}

impl PageQuery {
    /// 解析为 (offset, limit)
    ///
    /// 参数来自调用方，溢出时偏移量饱和到u64::MAX
    pub fn to_offset_limit(&self) -> (u64, u64) {
        let limit = self.limit.unwrap_or(10);
        let page = self.page.unwrap_or(1).max(1);
        (page.saturating_sub(1).saturating_mul(limit), limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = PageQuery {
            limit: None,
            page: None,
        };
        assert_eq!(query.to_offset_limit(), (0, 10));
    }

    #[test]
    fn test_second_page() {
        let query = PageQuery {
            limit: Some(10),
            page: Some(2),
        };
        assert_eq!(query.to_offset_limit(), (10, 10));
    }

    #[test]
    fn test_page_zero_is_clamped_to_first_page() {
        let query = PageQuery {
            limit: Some(5),
            page: Some(0),
        };
        assert_eq!(query.to_offset_limit(), (0, 5));
    }

    #[test]
    fn test_huge_page_saturates_instead_of_overflowing() {
        let query = PageQuery {
            limit: Some(2),
            page: Some(u64::MAX),
        };
        assert_eq!(query.to_offset_limit(), (u64::MAX, 2));
    }
}
