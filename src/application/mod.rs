// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 包含数据传输对象和用例，协调领域层与外部接口之间的交互
pub mod dto;
pub mod use_cases;
