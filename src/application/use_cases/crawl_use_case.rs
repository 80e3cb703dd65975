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

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::application::dto::crawl_request::CrawlRequestDto;
use crate::domain::models::attempt_result::AttemptResult;
use crate::domain::models::crawl_task::{CrawlConfig, CrawlTask, TaskStatus};
use crate::domain::repositories::attempt_repository::AttemptRepository;
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::traits::{FetchOutcome, Fetcher};

/// 爬取用例错误类型
#[derive(Error, Debug)]
pub enum CrawlUseCaseError {
    /// 请求校验失败
    #[error("{0}")]
    ValidationError(String),
    /// 仓库错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// 配置序列化错误
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// 爬取用例
///
/// 任务编排器：拥有任务状态机，负责提交时创建任务记录、
/// 调度后台执行，并驱动抓取 → 提取 → 记录的流程。
///
/// 状态机：Pending → Running → Completed/Failed。
/// 每个任务恰好执行一次抓取序列，无并行子抓取；
/// 配置中的深度和并发字段被接受但没有运行时效果。
pub struct CrawlUseCase<TR, AR> {
    task_repo: Arc<TR>,
    attempt_repo: Arc<AR>,
    fetcher: Arc<dyn Fetcher>,
    default_target_url: Option<String>,
}

impl<TR, AR> CrawlUseCase<TR, AR>
where
    TR: TaskRepository + 'static,
    AR: AttemptRepository + 'static,
{
    /// 创建新的爬取用例实例
    pub fn new(
        task_repo: Arc<TR>,
        attempt_repo: Arc<AR>,
        fetcher: Arc<dyn Fetcher>,
        default_target_url: Option<String>,
    ) -> Self {
        Self {
            task_repo,
            attempt_repo,
            fetcher,
            default_target_url,
        }
    }

    /// 提交爬取任务
    ///
    /// 校验配置、以Pending状态持久化任务记录，然后调度后台执行。
    /// 立即返回任务ID，不等待抓取完成；执行进度只能通过查询接口观察。
    ///
    /// # 参数
    ///
    /// * `dto` - 爬取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(Uuid)` - 新任务的ID
    /// * `Err(CrawlUseCaseError)` - 校验或持久化失败
    pub async fn submit(&self, mut dto: CrawlRequestDto) -> Result<Uuid, CrawlUseCaseError> {
        // Configured fallback target, mirroring the standalone crawl entry point
        if dto.target_url.is_empty() {
            if let Some(fallback) = &self.default_target_url {
                dto.target_url = fallback.clone();
            }
        }

        dto.validate()
            .map_err(|e| CrawlUseCaseError::ValidationError(e.to_string()))?;

        let config = dto.into_config();
        let task = CrawlTask::new(&config)?;
        let task = self.task_repo.create(&task).await?;

        let task_repo = self.task_repo.clone();
        let attempt_repo = self.attempt_repo.clone();
        let fetcher = self.fetcher.clone();
        let task_id = task.id;

        tokio::spawn(async move {
            Self::run(task_repo, attempt_repo, fetcher, task_id, config).await;
        });

        Ok(task_id)
    }

    /// 执行爬取任务
    ///
    /// 任务边界：execute中未被转化为尝试结果字段的错误在这里
    /// 被捕获并记录为任务Failed；该终态写入本身是尽力而为的，
    /// 嵌套失败只记录日志。
    #[instrument(skip_all, fields(task_id = %task_id, url = %config.target_url))]
    async fn run(
        task_repo: Arc<TR>,
        attempt_repo: Arc<AR>,
        fetcher: Arc<dyn Fetcher>,
        task_id: Uuid,
        config: CrawlConfig,
    ) {
        match Self::execute(&task_repo, &attempt_repo, fetcher.as_ref(), task_id, &config).await {
            Ok(()) => info!("Crawl task completed"),
            Err(e) => {
                error!("Crawl task failed: {}", e);
                if let Err(nested) = task_repo.mark_failed(task_id, &e.to_string()).await {
                    error!("Failed to record task failure: {}", nested);
                }
            }
        }
    }

    /// 抓取 → 提取 → 记录 序列
    async fn execute(
        task_repo: &Arc<TR>,
        attempt_repo: &Arc<AR>,
        fetcher: &dyn Fetcher,
        task_id: Uuid,
        config: &CrawlConfig,
    ) -> Result<(), CrawlUseCaseError> {
        task_repo.update_status(task_id, TaskStatus::Running).await?;

        let timestamp = Utc::now().timestamp_millis() as f64 / 1000.0;
        let outcome = fetcher.fetch(&config.target_url).await;
        let attempt = build_attempt(config, outcome, timestamp);

        // Persistence is best effort: the attempt survives in memory
        // and the task still runs to completion
        if let Err(e) = attempt_repo.insert(&attempt).await {
            error!("Failed to persist attempt result: {}", e);
        }

        task_repo.mark_completed(task_id, attempt.success).await?;
        Ok(())
    }
}

/// 从抓取结果组装尝试记录
///
/// HTTP 200且无传输错误时才调用提取服务；
/// 其余情况result保持为空对象，错误以数据形式记录。
fn build_attempt(config: &CrawlConfig, outcome: FetchOutcome, timestamp: f64) -> AttemptResult {
    let success = outcome.status_code == 200 && outcome.error.is_none();

    let result = if success {
        ExtractionService::extract(&outcome.body, &config.selectors)
    } else {
        serde_json::json!({})
    };

    AttemptResult {
        id: Uuid::new_v4(),
        url: config.target_url.clone(),
        success,
        duration: outcome.duration,
        data_size: outcome.body.len() as i64,
        status_code: outcome.status_code as i32,
        error: outcome.error,
        result,
        timestamp,
    }
}
