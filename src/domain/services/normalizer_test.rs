// Copyright (c) 2025 harvestrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::domain::models::candidate::{Pricing, RawCandidate};
    use crate::domain::services::normalizer::{normalize, slugify, MAX_DESCRIPTION_LEN};

    fn raw(name: &str, description: &str, url: &str) -> RawCandidate {
        RawCandidate {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            website_url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_slug_is_deterministic_and_idempotent() {
        let slug = slugify("ChatGPT  Pro! (beta)");
        assert_eq!(slug, "chatgpt-pro-beta");
        // Re-applying to the derived slug yields the same identity key
        assert_eq!(slugify(&slug), slug);
        assert_eq!(slugify("ChatGPT  Pro! (beta)"), slug);
    }

    #[test]
    fn test_slug_trims_leading_and_trailing_separators() {
        assert_eq!(slugify("--Hello World--"), "hello-world");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_missing_required_fields_yield_none() {
        let mut candidate = raw("Tool", "desc", "https://example.com");
        candidate.name = None;
        assert!(normalize(candidate, "Test").is_none());

        let mut candidate = raw("Tool", "desc", "https://example.com");
        candidate.description = Some("   ".to_string());
        assert!(normalize(candidate, "Test").is_none());

        let mut candidate = raw("Tool", "desc", "https://example.com");
        candidate.website_url = None;
        assert!(normalize(candidate, "Test").is_none());

        // One-character names are garbage matches
        assert!(normalize(raw("X", "desc", "https://example.com"), "Test").is_none());
    }

    #[test]
    fn test_description_is_truncated() {
        let long = "x".repeat(500);
        let tool = normalize(raw("Tool Name", &long, "https://example.com"), "Test").unwrap();
        assert_eq!(tool.description.chars().count(), MAX_DESCRIPTION_LEN);
        // The untruncated text survives as the long description
        assert_eq!(tool.long_description.as_deref(), Some(long.as_str()));
    }

    #[test]
    fn test_category_and_pricing_are_inferred_from_text() {
        let tool = normalize(
            raw(
                "PaintBot",
                "AI image generator, free plan with premium tier",
                "https://example.com",
            ),
            "Test",
        )
        .unwrap();
        assert_eq!(tool.category, "Image Generation");
        assert_eq!(tool.pricing, Pricing::Freemium);
    }

    #[test]
    fn test_explicit_pricing_wins_over_inference() {
        let mut candidate = raw("RepoTool", "free and open source tool", "https://example.com");
        candidate.pricing = Some(Pricing::Free);
        candidate.pricing_text = Some("paid".to_string());
        let tool = normalize(candidate, "Test").unwrap();
        assert_eq!(tool.pricing, Pricing::Free);
    }

    #[test]
    fn test_unknown_collections_default_to_empty() {
        let tool = normalize(raw("Tool Name", "desc", "https://example.com"), "Test").unwrap();
        assert!(tool.features.is_empty());
        assert!(tool.tags.is_empty());
        assert_eq!(tool.source_name, "Test");
    }
}
