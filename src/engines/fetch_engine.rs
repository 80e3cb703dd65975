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

use crate::config::settings::FetchSettings;
use crate::engines::traits::{FetchOutcome, Fetcher};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取引擎。客户端在构造时创建一次，
/// 超时和User-Agent来自配置。
pub struct FetchEngine {
    client: reqwest::Client,
}

impl FetchEngine {
    /// 创建新的抓取引擎实例
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取配置
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchEngine)` - 抓取引擎
    /// * `Err(reqwest::Error)` - 客户端构建失败
    pub fn new(settings: &FetchSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for FetchEngine {
    /// 执行一次GET抓取
    ///
    /// 计时覆盖从请求发出到响应体可用（或失败）的墙钟时间。
    /// 任何传输层错误都被转化为结果数据，不向调用方抛出。
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let start = Instant::now();

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                return FetchOutcome {
                    status_code: 0,
                    body: String::new(),
                    duration: start.elapsed().as_secs_f64(),
                    error: Some(e.to_string()),
                }
            }
        };

        let status_code = response.status().as_u16();

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return FetchOutcome {
                    status_code,
                    body: String::new(),
                    duration: start.elapsed().as_secs_f64(),
                    error: Some(e.to_string()),
                }
            }
        };

        let error = if status_code == 200 {
            None
        } else {
            Some(format!("HTTP status code: {}", status_code))
        };

        FetchOutcome {
            status_code,
            body,
            duration: start.elapsed().as_secs_f64(),
            error,
        }
    }
}
