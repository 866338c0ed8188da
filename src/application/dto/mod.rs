// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod custom_scrape_request;
pub mod run_summary;
