// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 选择器规则
///
/// 命名的提取规则。name 作为提取结果映射的键，
/// selector 的解释完全委托给提取服务，领域层不做语法校验。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorSpec {
    /// 字段名称，在选择器列表内唯一
    pub name: String,
    /// 选择器表达式（配置声明为xpath，执行时做简化CSS处理）
    #[serde(rename = "xpath")]
    pub selector: String,
}

/// 爬取配置
///
/// 一次提交的完整抓取配置，提交后不可变，
/// 以JSON快照的形式嵌入任务记录。
///
/// auto_discovery、max_depth 和 concurrency 为兼容原始配置格式而保留：
/// 会被接受并原样记录在任务快照中，但核心逻辑当前不使用它们
/// （单URL、深度1、单次抓取）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// 目标URL，必填且非空
    pub target_url: String,
    /// 有序的选择器列表
    #[serde(rename = "xpath_selectors")]
    pub selectors: Vec<SelectorSpec>,
    /// 自动发现开关（接受但不生效）
    #[serde(default)]
    pub auto_discovery: bool,
    /// 最大爬取深度（接受但深度1之外不强制）
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// 并发提示（接受但不生效）
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,
}

fn default_max_depth() -> u32 {
    2
}

fn default_concurrency() -> u32 {
    3
}

/// 爬取任务实体
///
/// 表示一次已提交的爬取配置从提交到终态的完整生命周期。
/// 任务记录在提交时创建，由编排器精确地变更两次
/// （Pending → Running，再到 Completed 或 Failed），
/// 进入终态后不再发生任何变更。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlTask {
    /// 任务唯一标识符
    pub id: Uuid,
    /// 爬取配置快照，JSON格式
    pub config: serde_json::Value,
    /// 任务状态
    pub status: TaskStatus,
    /// 开始时间，任务提交的时间戳
    pub start_time: DateTime<Utc>,
    /// 结束时间，仅在进入终态后存在
    pub end_time: Option<DateTime<Utc>>,
    /// 已完成URL数量
    pub completed_urls: i32,
    /// 总URL数量（核心逻辑中恒为1，无链接扩展）
    pub total_urls: i32,
    /// 抓取是否成功，完成时设置
    pub success: Option<bool>,
    /// 错误信息，失败时设置
    pub error: Option<String>,
}

impl CrawlTask {
    /// 从爬取配置创建新任务
    ///
    /// # 参数
    ///
    /// * `config` - 爬取配置
    ///
    /// # 返回值
    ///
    /// * `Ok(CrawlTask)` - Pending状态的新任务，配置已做JSON快照
    /// * `Err(serde_json::Error)` - 配置序列化失败
    pub fn new(config: &CrawlConfig) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            config: serde_json::to_value(config)?,
            status: TaskStatus::Pending,
            start_time: Utc::now(),
            end_time: None,
            completed_urls: 0,
            total_urls: 1,
            success: None,
            error: None,
        })
    }
}

/// 任务状态枚举
///
/// 表示爬取任务在其生命周期中的不同状态。
/// 状态转换遵循以下流程，且单向不可逆：
/// Pending → Running → Completed/Failed
///
/// Completed 表示"任务执行完毕"，不代表抓取本身成功；
/// 抓取结果记录在任务的 success 字段和尝试记录中。
/// Failed 仅用于未被转化为尝试结果字段的意外编排错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// 待执行，任务已创建但尚未开始执行
    #[default]
    Pending,
    /// 执行中，抓取加提取流程正在进行
    Running,
    /// 已完成，任务执行完毕（不论抓取成功与否）
    Completed,
    /// 已失败，意外错误逃逸到任务边界
    Failed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::Running => write!(f, "running"),
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "running" => Ok(TaskStatus::Running),
            "completed" => Ok(TaskStatus::Completed),
            "failed" => Ok(TaskStatus::Failed),
            _ => Err(()),
        }
    }
}
