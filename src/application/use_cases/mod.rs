// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// - 爬取用例（crawl_use_case）：任务提交与后台执行编排
/// - 查询用例（query_use_case）：状态汇总与结果/任务查询
pub mod crawl_use_case;
pub mod query_use_case;
