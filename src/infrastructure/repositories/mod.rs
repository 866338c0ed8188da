// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod catalog_repo_impl;
pub mod scraper_log_repo_impl;

pub use catalog_repo_impl::CatalogRepositoryImpl;
pub use scraper_log_repo_impl::ScraperLogRepositoryImpl;
