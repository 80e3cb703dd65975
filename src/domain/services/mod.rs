// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含不属于单个实体的业务逻辑，当前只有HTML内容提取服务。
pub mod extraction_service;
