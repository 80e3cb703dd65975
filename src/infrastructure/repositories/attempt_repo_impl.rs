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

use crate::domain::models::attempt_result::AttemptResult;
use crate::domain::repositories::attempt_repository::AttemptRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::attempt_result as attempt_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 尝试结果仓库实现
pub struct AttemptRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl AttemptRepositoryImpl {
    /// 创建新的尝试结果仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的尝试结果仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// 将数据库模型转换为领域实体
fn to_domain(m: attempt_entity::Model) -> AttemptResult {
    AttemptResult {
        id: m.id,
        url: m.url,
        success: m.success,
        duration: m.duration,
        data_size: m.data_size,
        status_code: m.status_code,
        error: m.error,
        result: m.result,
        timestamp: m.timestamp,
    }
}

#[async_trait]
impl AttemptRepository for AttemptRepositoryImpl {
    async fn insert(&self, attempt: &AttemptResult) -> Result<(), RepositoryError> {
        let model = attempt_entity::ActiveModel {
            id: Set(attempt.id),
            url: Set(attempt.url.clone()),
            success: Set(attempt.success),
            duration: Set(attempt.duration),
            data_size: Set(attempt.data_size),
            status_code: Set(attempt.status_code),
            error: Set(attempt.error.clone()),
            result: Set(attempt.result.clone()),
            timestamp: Set(attempt.timestamp),
        };

        attempt_entity::Entity::insert(model)
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AttemptResult>, RepositoryError> {
        let model = attempt_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(to_domain))
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<AttemptResult>, RepositoryError> {
        let models = attempt_entity::Entity::find()
            .order_by_desc(attempt_entity::Column::Timestamp)
            .offset(offset)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = attempt_entity::Entity::find().count(self.db.as_ref()).await?;
        Ok(count)
    }

    async fn count_successes(&self) -> Result<u64, RepositoryError> {
        let count = attempt_entity::Entity::find()
            .filter(attempt_entity::Column::Success.eq(true))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}
