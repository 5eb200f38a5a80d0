use serde_json::json;

use crate::types::{
    BrandGuidelineProfile, Category, ComplianceIssue, ScrapedDesignData, Severity,
};

use super::*;

fn input(guideline: serde_json::Value, scraped: serde_json::Value) -> AnalysisInput {
    let guideline: BrandGuidelineProfile =
        serde_json::from_value(guideline).expect("guideline snapshot");
    let scraped: ScrapedDesignData = serde_json::from_value(scraped).expect("scraped snapshot");
    AnalysisInput::from_snapshots(&guideline, &scraped)
}

mod scoring {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn renormalizes_over_present_categories() {
        let mut scores = BTreeMap::new();
        scores.insert(Category::Colors, 1.0f32);
        scores.insert(Category::Logo, 0.5f32);

        let combined = combine_scores(&scores, &CategoryWeights::default());

        // (0.30 * 1.0 + 0.25 * 0.5) / (0.30 + 0.25)
        assert!((combined - 0.772_727_3).abs() < 1e-5);
    }

    #[test]
    fn empty_scores_combine_to_zero() {
        let scores = BTreeMap::new();
        assert_eq!(combine_scores(&scores, &CategoryWeights::default()), 0.0);
    }

    #[test]
    fn single_category_gets_full_weight() {
        let mut scores = BTreeMap::new();
        scores.insert(Category::Layout, 0.8f32);
        let combined = combine_scores(&scores, &CategoryWeights::default());
        assert!((combined - 0.8).abs() < 1e-6);
    }
}

mod confidence {
    use super::*;

    #[test]
    fn full_coverage_and_quality_give_full_confidence() {
        let coverage = DataCoverage {
            brand_points: 4,
            scraped_points: 4,
            valid_points: 10,
            raw_points: 10,
        };
        assert!((category_confidence(&coverage) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn missing_data_falls_back_to_neutral_halves() {
        // No brand points and nothing scraped: both factors neutral.
        let coverage = DataCoverage::default();
        assert!((category_confidence(&coverage) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn poor_parse_quality_drags_confidence_down() {
        let full = DataCoverage {
            brand_points: 2,
            scraped_points: 2,
            valid_points: 10,
            raw_points: 10,
        };
        let noisy = DataCoverage {
            valid_points: 2,
            ..full
        };
        assert!(category_confidence(&noisy) < category_confidence(&full));
    }
}

mod issue_merging {
    use super::*;

    fn issue(category: Category, severity: Severity, message: &str) -> ComplianceIssue {
        ComplianceIssue::new(category, severity, "", "", message)
    }

    #[test]
    fn orders_by_severity_then_category() {
        let merged = merge_issues(vec![
            issue(Category::Layout, Severity::Low, "layout-low"),
            issue(Category::Colors, Severity::High, "colors-high"),
            issue(Category::Typography, Severity::High, "typography-high"),
            issue(Category::Colors, Severity::Critical, "colors-critical"),
        ]);

        let messages: Vec<&str> = merged.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["colors-critical", "colors-high", "typography-high", "layout-low"]
        );
    }

    #[test]
    fn preserves_insertion_order_within_a_group() {
        let merged = merge_issues(vec![
            issue(Category::Colors, Severity::High, "first"),
            issue(Category::Colors, Severity::High, "second"),
        ]);
        assert_eq!(merged[0].message, "first");
        assert_eq!(merged[1].message, "second");
    }
}

mod color {
    use super::*;

    #[test]
    fn skips_without_brand_color_data() {
        let input = input(json!({}), json!({ "colors": ["#FF0000"] }));
        let result = ColorComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis");
        assert!(result.is_none());
    }

    #[test]
    fn perfect_palette_usage_scores_one() {
        let input = input(
            json!({ "colors": { "primary": "#FF0000" } }),
            json!({ "colors": ["#FF0000"] }),
        );
        let analysis = ColorComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 1.0).abs() < 1e-6);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn off_brand_button_color_raises_high_issues() {
        // A saturated mid-brightness green classifies as a button color.
        let input = input(
            json!({ "colors": { "primary": "#FF0000" } }),
            json!({ "colors": ["#00FF00"] }),
        );
        let analysis = ColorComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!(analysis.score < 1e-6);
        let high: Vec<&ComplianceIssue> = analysis
            .issues
            .iter()
            .filter(|i| i.severity == Severity::High)
            .collect();
        assert!(high
            .iter()
            .any(|i| i.message.contains("not used on buttons")));
        assert!(high
            .iter()
            .any(|i| i.message.contains("does not match the brand palette")));
    }

    #[test]
    fn forbidden_color_is_flagged_high() {
        let input = input(
            json!({ "colors": { "primary": "#FF0000", "forbidden": ["#00FF00"] } }),
            json!({ "colors": ["#FF0000", "#00FF00"] }),
        );
        let analysis = ColorComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!(analysis.issues.iter().any(|i| {
            i.severity == Severity::High && i.message.contains("Forbidden color #00FF00")
        }));
    }

    #[test]
    fn achromatic_colors_are_always_authorized() {
        let input = input(
            json!({ "colors": { "palette": ["#FF0000"] } }),
            json!({ "colors": ["#FFFFFF", "#000000", "#888888"] }),
        );
        let analysis = ColorComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 1.0).abs() < 1e-6);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn basic_fallback_scores_overlap_without_issues() {
        let input = input(
            json!({ "colors": { "palette": ["#FF0000", "#0000FF"] } }),
            json!({ "colors": ["#FF0000", "#00FF00"] }),
        );
        let analysis = BasicColorAnalyzer
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 0.5).abs() < 1e-6);
        assert!(analysis.issues.is_empty());
    }
}

mod typography {
    use super::*;

    #[test]
    fn skips_without_brand_typography() {
        let input = input(
            json!({}),
            json!({ "typography": { "families": ["Inter"] } }),
        );
        let result = TypographyComplianceAnalyzer
            .analyze(&input)
            .expect("analysis");
        assert!(result.is_none());
    }

    #[test]
    fn matching_family_and_weights_score_high() {
        let input = input(
            json!({ "typography": { "primary": "Inter", "weights": ["400", "700"] } }),
            json!({
                "typography": { "families": ["Inter"], "weights": ["regular", "bold"] }
            }),
        );
        let analysis = TypographyComplianceAnalyzer
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        // 0.4 * 1.0 + 0.3 * 0.5 + 0.2 * 1.0 + 0.1 * 1.0
        assert!((analysis.score - 0.85).abs() < 1e-6);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn unrelated_primary_family_raises_high_issue() {
        let input = input(
            json!({ "typography": { "primary": "Inter" } }),
            json!({ "typography": { "families": ["Papyrus"] } }),
        );
        let analysis = TypographyComplianceAnalyzer
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!(analysis.score < 0.5);
        assert!(analysis.issues.iter().any(|i| {
            i.severity == Severity::High && i.message.contains("does not match")
        }));
    }

    #[test]
    fn missing_weights_raise_low_issue() {
        let input = input(
            json!({ "typography": { "primary": "Inter", "weights": ["400", "700"] } }),
            json!({
                "typography": { "families": ["Inter"], "weights": ["400"] }
            }),
        );
        let analysis = TypographyComplianceAnalyzer
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!(analysis.issues.iter().any(|i| {
            i.severity == Severity::Low
                && i.message.contains("Font weights not observed")
                && i.message.contains("700")
        }));
    }

    #[test]
    fn basic_fallback_uses_primary_similarity_only() {
        let input = input(
            json!({ "typography": { "primary": "Helvetica" } }),
            json!({ "typography": { "families": ["Arial"] } }),
        );
        let analysis = BasicTypographyAnalyzer
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 0.8).abs() < 1e-6);
        assert!(analysis.issues.is_empty());
    }
}

mod logo {
    use super::*;

    #[test]
    fn skips_without_brand_logo_constraints() {
        let input = input(json!({}), json!({ "logo": { "found": true } }));
        let result = LogoComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis");
        assert!(result.is_none());
    }

    #[test]
    fn missing_logo_is_a_high_issue() {
        let input = input(
            json!({ "logo": { "minSize": 32 } }),
            json!({ "logo": { "found": false } }),
        );
        let analysis = LogoComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.issues.len(), 1);
        assert_eq!(analysis.issues[0].severity, Severity::High);
        assert!(analysis.issues[0].message.contains("not found"));
    }

    #[test]
    fn missing_logo_score_is_configurable() {
        let input = input(
            json!({ "logo": { "minSize": 32 } }),
            json!({ "logo": { "found": false } }),
        );
        let analysis = LogoComplianceAnalyzer { missing_score: 0.35 }
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 0.35).abs() < 1e-6);
    }

    #[test]
    fn undersized_logo_raises_medium_issue() {
        let input = input(
            json!({ "logo": { "minSize": 64 } }),
            json!({ "logo": { "found": true, "width": 40.0, "height": 40.0 } }),
        );
        let analysis = LogoComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert_eq!(analysis.score, 0.0);
        assert!(analysis.issues.iter().any(|i| {
            i.severity == Severity::Medium && i.message.contains("below the minimum size")
        }));
    }

    #[test]
    fn distorted_aspect_ratio_raises_issue() {
        let input = input(
            json!({ "logo": { "aspectRatio": 1.0 } }),
            json!({ "logo": { "found": true, "width": 200.0, "height": 100.0 } }),
        );
        let analysis = LogoComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!(analysis
            .issues
            .iter()
            .any(|i| i.message.contains("distorted")));
    }

    #[test]
    fn compliant_logo_scores_one() {
        let input = input(
            json!({ "logo": { "minSize": 32, "aspectRatio": 2.0 } }),
            json!({ "logo": { "found": true, "width": 100.0, "height": 50.0 } }),
        );
        let analysis = LogoComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 1.0).abs() < 1e-6);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn found_logo_without_dimensions_scores_neutral() {
        let input = input(
            json!({ "logo": { "minSize": 32, "aspectRatio": 2.0 } }),
            json!({ "logo": { "found": true } }),
        );
        let analysis = LogoComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        // Size and ratio constraints exist but nothing was measured, so the
        // category neither passes nor fails outright.
        assert!((analysis.score - 0.5).abs() < 1e-6);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn rules_only_profile_passes_on_presence() {
        let input = input(
            json!({ "logo": { "rules": ["Do not rotate"] } }),
            json!({ "logo": { "found": true } }),
        );
        let analysis = LogoComplianceAnalyzer::default()
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 1.0).abs() < 1e-6);
    }
}

mod layout {
    use super::*;

    #[test]
    fn skips_without_layout_data() {
        let input = input(json!({ "colors": { "primary": "#FF0000" } }), json!({}));
        let result = LayoutComplianceAnalyzer.analyze(&input).expect("analysis");
        assert!(result.is_none());
    }

    #[test]
    fn consistent_layout_keeps_the_base_score() {
        let input = input(
            json!({}),
            json!({
                "components": [
                    { "component": "button", "margin": 8.0, "padding": 16.0 },
                    { "component": "button", "margin": 8.0, "padding": 16.0 }
                ],
                "headings": ["h1", "h2"]
            }),
        );
        let analysis = LayoutComplianceAnalyzer
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 0.8).abs() < 1e-6);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn scattered_spacing_raises_low_issue() {
        let input = input(
            json!({}),
            json!({
                "components": [
                    { "component": "card", "margin": 3.0, "padding": 7.0 },
                    { "component": "card", "margin": 11.0, "padding": 19.0 }
                ]
            }),
        );
        let analysis = LayoutComplianceAnalyzer
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 0.7).abs() < 1e-6);
        assert!(analysis.issues.iter().any(|i| {
            i.severity == Severity::Low && i.message.contains("Inconsistent spacing")
        }));
    }

    #[test]
    fn skipped_heading_level_raises_issue() {
        let input = input(json!({}), json!({ "headings": ["h1", "h3"] }));
        let analysis = LayoutComplianceAnalyzer
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!(analysis
            .issues
            .iter()
            .any(|i| i.message.contains("skips from h1 to h3")));
    }

    #[test]
    fn score_never_falls_below_the_floor() {
        // Many inconsistent component groups plus heading gaps.
        let input = input(
            json!({}),
            json!({
                "components": [
                    { "component": "button", "margin": 1.0, "padding": 2.0 },
                    { "component": "button", "margin": 3.0, "padding": 4.0 },
                    { "component": "card", "margin": 5.0, "padding": 6.0 },
                    { "component": "card", "margin": 7.0, "padding": 8.0 },
                    { "component": "nav", "margin": 9.0, "padding": 10.0 },
                    { "component": "nav", "margin": 11.0, "padding": 12.0 },
                    { "component": "hero", "margin": 13.0, "padding": 14.0 },
                    { "component": "hero", "margin": 15.0, "padding": 16.0 },
                    { "component": "form", "margin": 17.0, "padding": 18.0 },
                    { "component": "form", "margin": 19.0, "padding": 20.0 },
                    { "component": "list", "margin": 21.0, "padding": 22.0 },
                    { "component": "list", "margin": 23.0, "padding": 24.0 },
                    { "component": "modal", "margin": 25.0, "padding": 26.0 },
                    { "component": "modal", "margin": 27.0, "padding": 28.0 },
                    { "component": "badge", "margin": 29.0, "padding": 30.0 },
                    { "component": "badge", "margin": 31.0, "padding": 32.0 }
                ],
                "headings": ["h1", "h3", "h5"]
            }),
        );
        let analysis = LayoutComplianceAnalyzer
            .analyze(&input)
            .expect("analysis")
            .expect("scored");

        assert!((analysis.score - 0.1).abs() < 1e-6);
    }
}
