// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 爬取任务（crawl_task）：一次提交的抓取配置及其生命周期状态
/// - 尝试结果（attempt_result)：单次抓取加提取执行的不可变记录
///
/// 这些模型构成了系统的数据基础，定义了业务概念的
/// 结构和行为。
pub mod attempt_result;
pub mod crawl_task;
