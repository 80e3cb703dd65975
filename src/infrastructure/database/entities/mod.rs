// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// sea-orm实体定义，对应migration中创建的表结构
pub mod attempt_result;
pub mod crawl_task;
