// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl_task::{CrawlTask, TaskStatus};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 任务仓库特质
///
/// 定义爬取任务数据访问接口，提供任务的创建、状态流转和查询功能。
/// 状态流转方法只做单向推进：任务进入终态后不应再被更新。
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 创建新任务
    async fn create(&self, task: &CrawlTask) -> Result<CrawlTask, RepositoryError>;

    /// 根据ID查找任务
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CrawlTask>, RepositoryError>;

    /// 更新任务状态（非终态流转，Pending → Running）
    async fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<(), RepositoryError>;

    /// 标记任务已完成
    ///
    /// 设置终态Completed、结束时间、已完成URL计数和抓取成功标志。
    /// Completed表示任务执行完毕，success记录抓取本身是否成功。
    async fn mark_completed(&self, id: Uuid, success: bool) -> Result<(), RepositoryError>;

    /// 标记任务已失败
    ///
    /// 设置终态Failed、结束时间和错误信息。
    async fn mark_failed(&self, id: Uuid, error: &str) -> Result<(), RepositoryError>;

    /// 按开始时间降序分页列出任务
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<CrawlTask>, RepositoryError>;
}
