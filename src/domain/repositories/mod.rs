// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义领域层的数据访问抽象接口，具体实现位于基础设施层。
/// 该模块遵循依赖倒置原则，确保领域层不依赖具体的存储技术。
pub mod attempt_repository;
pub mod task_repository;
