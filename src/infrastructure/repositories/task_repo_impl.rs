// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::crawl_task::{CrawlTask, TaskStatus};
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::infrastructure::database::entities::crawl_task as task_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 任务仓库实现
pub struct TaskRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    /// 创建新的任务仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的任务仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// 将数据库模型转换为领域实体
fn to_domain(m: task_entity::Model) -> Result<CrawlTask, RepositoryError> {
    let status = m
        .status
        .parse::<TaskStatus>()
        .map_err(|_| RepositoryError::Database(DbErr::Custom("Invalid task status".to_string())))?;

    Ok(CrawlTask {
        id: m.id,
        config: m.config,
        status,
        start_time: m.start_time.into(),
        end_time: m.end_time.map(Into::into),
        completed_urls: m.completed_urls,
        total_urls: m.total_urls,
        success: m.success,
        error: m.error,
    })
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn create(&self, task: &CrawlTask) -> Result<CrawlTask, RepositoryError> {
        let model = task_entity::ActiveModel {
            id: Set(task.id),
            status: Set(task.status.to_string()),
            config: Set(task.config.clone()),
            start_time: Set(task.start_time.into()),
            end_time: Set(task.end_time.map(Into::into)),
            completed_urls: Set(task.completed_urls),
            total_urls: Set(task.total_urls),
            success: Set(task.success),
            error: Set(task.error.clone()),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CrawlTask>, RepositoryError> {
        let model = task_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        match model {
            Some(m) => Ok(Some(to_domain(m)?)),
            None => Ok(None),
        }
    }

    async fn update_status(&self, id: Uuid, status: TaskStatus) -> Result<(), RepositoryError> {
        let model = task_entity::ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            ..Default::default()
        };

        model.update(self.db.as_ref()).await?;
        Ok(())
    }

    async fn mark_completed(&self, id: Uuid, success: bool) -> Result<(), RepositoryError> {
        let model = task_entity::ActiveModel {
            id: Set(id),
            status: Set(TaskStatus::Completed.to_string()),
            end_time: Set(Some(chrono::Utc::now().into())),
            completed_urls: Set(1),
            success: Set(Some(success)),
            ..Default::default()
        };

        model.update(self.db.as_ref()).await?;
        Ok(())
    }

    async fn mark_failed(&self, id: Uuid, error: &str) -> Result<(), RepositoryError> {
        let model = task_entity::ActiveModel {
            id: Set(id),
            status: Set(TaskStatus::Failed.to_string()),
            end_time: Set(Some(chrono::Utc::now().into())),
            error: Set(Some(error.to_string())),
            ..Default::default()
        };

        model.update(self.db.as_ref()).await?;
        Ok(())
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<CrawlTask>, RepositoryError> {
        let models = task_entity::Entity::find()
            .order_by_desc(task_entity::Column::StartTime)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        models.into_iter().map(to_domain).collect()
    }
}
