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

use async_trait::async_trait;

/// 抓取结果
///
/// 单次GET请求的完整观测值。传输层失败不会越过抓取器边界抛出，
/// 而是以 status_code = 0 加错误信息的形式返回；
/// 非200响应同样以数据形式记录，已接收的响应体原样保留。
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// HTTP状态码，请求未完成时为0
    pub status_code: u16,
    /// 原始响应体，未收到时为空字符串
    pub body: String,
    /// 耗时（秒），从请求开始到响应体可用或失败
    pub duration: f64,
    /// 错误信息
    pub error: Option<String>,
}

/// 抓取器特质
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 执行一次GET抓取，无自动重试
    async fn fetch(&self, url: &str) -> FetchOutcome;
}
