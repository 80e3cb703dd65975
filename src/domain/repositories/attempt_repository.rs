// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::attempt_result::AttemptResult;
use async_trait::async_trait;
use uuid::Uuid;

use super::task_repository::RepositoryError;

/// 尝试结果仓库特质
///
/// 定义尝试结果的数据访问接口。尝试结果是只增不改的：
/// 接口只提供插入、查找和聚合查询，没有更新和删除。
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// 插入一条尝试结果
    async fn insert(&self, attempt: &AttemptResult) -> Result<(), RepositoryError>;

    /// 根据ID查找尝试结果
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AttemptResult>, RepositoryError>;

    /// 按时间戳降序分页列出尝试结果
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<AttemptResult>, RepositoryError>;

    /// 统计尝试结果总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 统计成功的尝试结果数量
    async fn count_successes(&self) -> Result<u64, RepositoryError>;
}
