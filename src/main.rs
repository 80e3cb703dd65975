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

use fetchrs::config::settings::Settings;
use fetchrs::engines::fetch_engine::FetchEngine;
use fetchrs::engines::traits::Fetcher;
use fetchrs::infrastructure::database::connection;
use fetchrs::infrastructure::repositories::attempt_repo_impl::AttemptRepositoryImpl;
use fetchrs::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use fetchrs::presentation::routes;
use fetchrs::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务。
/// 数据库连接在启动时创建一次，通过显式注入传递给
/// 各仓库实现，不存在进程级全局可变状态。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting fetchrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize Components
    let task_repo = Arc::new(TaskRepositoryImpl::new(db.clone()));
    let attempt_repo = Arc::new(AttemptRepositoryImpl::new(db.clone()));
    let fetcher: Arc<dyn Fetcher> = Arc::new(FetchEngine::new(&settings.fetch)?);

    // 5. Start HTTP server
    let app = routes::build_router(task_repo, attempt_repo, fetcher, settings.clone());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
