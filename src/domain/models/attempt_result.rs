// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 尝试结果实体
///
/// 表示针对单个URL的一次抓取加提取执行的完整记录。
/// 每次抓取尝试（无论成功或失败）都会生成一条记录，
/// 持久化后不可变，并且独立于所属任务可查询。
///
/// result 字段是以选择器名称为键的JSON对象，每个字段的取值
/// 三选一：字符串数组（按文档顺序的提取文本）、null（无匹配）、
/// 字符串（该选择器的错误信息）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptResult {
    /// 结果唯一标识符，持久化时生成
    pub id: Uuid,
    /// 抓取的目标URL
    pub url: String,
    /// 抓取是否成功（HTTP 200且无传输错误）
    pub success: bool,
    /// 抓取耗时（秒），从请求开始到响应体可用或失败
    pub duration: f64,
    /// 原始响应体大小（字节）
    pub data_size: i64,
    /// HTTP状态码，请求未完成时为0
    pub status_code: i32,
    /// 错误信息，失败时设置
    pub error: Option<String>,
    /// 提取结果映射，选择器名称 → 提取内容
    pub result: serde_json::Value,
    /// 时间戳（自纪元起的秒数）
    pub timestamp: f64,
}
