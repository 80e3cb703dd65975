// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 引擎模块
///
/// 实现出站HTTP抓取能力，抓取器特质与reqwest实现分离，
/// 便于在测试中替换传输层。
pub mod fetch_engine;
pub mod traits;
