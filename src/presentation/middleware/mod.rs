// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod auth_middleware;
