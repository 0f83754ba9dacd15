//! Unit tests for tagged-line parsing of model output.

#[cfg(test)]
mod parser_tests {
    use crate::models::{Action, Trend, VolumeProfile};
    use crate::services::parser::*;

    // ============= Scanner Tests =============

    #[test]
    fn test_clean_value_strips_brackets_and_whitespace() {
        assert_eq!(clean_value(" [HIGH] "), "HIGH");
        assert_eq!(clean_value("[ strong momentum ]"), "strong momentum");
        assert_eq!(clean_value(""), "");
    }

    #[test]
    fn test_scanner_keeps_text_after_first_colon() {
        let rec = ActionRecommendation::parse("REASON:[ratio 3:1 in favour of buyers]");
        assert_eq!(rec.reasoning.as_deref(), Some("ratio 3:1 in favour of buyers"));
    }

    #[test]
    fn test_scanner_prefix_is_case_sensitive() {
        assert_eq!(extract_risk_score("risk:[HIGH]"), 0.5);
        assert_eq!(extract_action_and_reasoning("action: BUY").0, Action::Hold);
    }

    #[test]
    fn test_scanner_requires_colon_after_tag() {
        assert_eq!(extract_risk_score("RISKY:[HIGH]"), 0.5);
    }

    // ============= Risk Tests =============

    #[test]
    fn test_risk_high() {
        let text = "RISK:[HIGH]\nEVIDENCE:[x]\nCONFIDENCE:[0.8]";
        assert_eq!(extract_risk_score(text), 0.7);

        let assessment = RiskAssessment::parse(text);
        assert_eq!(assessment.level, Some(RiskLevel::High));
        assert_eq!(assessment.evidence.as_deref(), Some("x"));
        assert_eq!(assessment.confidence, Some(0.8));
    }

    #[test]
    fn test_risk_empty_defaults_to_medium() {
        assert_eq!(extract_risk_score(""), 0.5);
        assert_eq!(RiskAssessment::parse("").level, None);
    }

    #[test]
    fn test_risk_levels_table() {
        assert_eq!(extract_risk_score("RISK:[LOW]"), 0.3);
        assert_eq!(extract_risk_score("RISK: medium"), 0.5);
        assert_eq!(extract_risk_score("RISK:high"), 0.7);
        assert_eq!(extract_risk_score("RISK:[EXTREME]"), 0.5);
    }

    #[test]
    fn test_risk_first_recognised_level_wins() {
        let text = "Some preamble\nRISK:[SEVERE]\nRISK:[LOW]\nRISK:[HIGH]";
        assert_eq!(extract_risk_score(text), 0.3);
    }

    #[test]
    fn test_risk_indented_lines() {
        assert_eq!(extract_risk_score("   RISK:[HIGH]   \r\n"), 0.7);
    }

    #[test]
    fn test_risk_confidence_out_of_range_ignored() {
        assert_eq!(RiskAssessment::parse("CONFIDENCE:[1.7]").confidence, None);
    }

    // ============= Action Tests =============

    #[test]
    fn test_action_buy_with_reason() {
        let (action, reasoning) = extract_action_and_reasoning("ACTION:[BUY]\nREASON:[momentum]");
        assert_eq!(action, Action::Buy);
        assert_eq!(reasoning, "momentum");
    }

    #[test]
    fn test_action_empty_defaults() {
        let (action, reasoning) = extract_action_and_reasoning("");
        assert_eq!(action, Action::Hold);
        assert_eq!(reasoning, "Insufficient data for analysis");
    }

    #[test]
    fn test_action_lowercase_value_is_uppercased() {
        let (action, _) = extract_action_and_reasoning("ACTION: sell");
        assert_eq!(action, Action::Sell);
    }

    #[test]
    fn test_action_unknown_value_holds() {
        let (action, _) = extract_action_and_reasoning("ACTION:[STRONG BUY]");
        assert_eq!(action, Action::Hold);
    }

    #[test]
    fn test_mitigation_is_appended() {
        let text = "ACTION:[SELL]\nREASON:[bearish divergence]\nSUPPORT:[volume fading]\nMITIGATION:[scale out in thirds]";
        let (action, reasoning) = extract_action_and_reasoning(text);

        assert_eq!(action, Action::Sell);
        assert_eq!(reasoning, "volume fading Risk mitigation: scale out in thirds");
    }

    #[test]
    fn test_later_reason_discards_earlier_mitigation() {
        let (_, reasoning) = extract_action_and_reasoning("MITIGATION:[x]\nREASON:[r]");
        assert_eq!(reasoning, "r");
    }

    #[test]
    fn test_support_before_reason_is_overwritten() {
        let (_, reasoning) = extract_action_and_reasoning("SUPPORT:[range bound]\nREASON:[breakout]");
        assert_eq!(reasoning, "breakout");
    }

    #[test]
    fn test_empty_support_keeps_reason() {
        let (_, reasoning) = extract_action_and_reasoning("REASON:[momentum]\nSUPPORT:[]");
        assert_eq!(reasoning, "momentum");
    }

    #[test]
    fn test_support_used_when_reason_missing() {
        let (_, reasoning) = extract_action_and_reasoning("ACTION:[HOLD]\nSUPPORT:[range bound]");
        assert_eq!(reasoning, "range bound");
    }

    #[test]
    fn test_mitigation_without_reason() {
        let (_, reasoning) = extract_action_and_reasoning("MITIGATION:[tight stop]");
        assert_eq!(reasoning, "Insufficient data for analysis Risk mitigation: tight stop");
    }

    #[test]
    fn test_empty_reason_ignored() {
        let (_, reasoning) = extract_action_and_reasoning("REASON:[]\nREASON:[  ]");
        assert_eq!(reasoning, "Insufficient data for analysis");
    }

    // ============= Validation Tests =============

    #[test]
    fn test_validation_report() {
        let text = "QUALITY:[pass]\nLOGIC:[valid]\nRISK:[acceptable]\nALTERNATIVES:[wait for retest]";
        let report = ValidationReport::parse(text);

        assert_eq!(report.quality.as_deref(), Some("PASS"));
        assert_eq!(report.logic.as_deref(), Some("VALID"));
        assert_eq!(report.risk.as_deref(), Some("ACCEPTABLE"));
        assert_eq!(report.alternatives.as_deref(), Some("wait for retest"));
        assert_eq!(report.passed(), Some(true));
    }

    #[test]
    fn test_validation_empty() {
        let report = ValidationReport::parse("");
        assert_eq!(report, ValidationReport::default());
        assert_eq!(report.passed(), None);
    }

    // ============= Market Context Tests =============

    #[test]
    fn test_market_context_full() {
        let text = "TREND:[UP]\nVOLUME:[INCREASING]\nSUPPORT:[61000, $59500.5]\nRESISTANCE:[68000,72000]\nPATTERNS:[ascending triangle, golden cross]";
        let ctx = parse_market_context(text);

        assert_eq!(ctx.trend, Trend::Up);
        assert_eq!(ctx.volume_profile, VolumeProfile::Increasing);
        assert_eq!(ctx.support_levels, vec![61000.0, 59500.5]);
        assert_eq!(ctx.resistance_levels, vec![68000.0, 72000.0]);
        assert_eq!(ctx.patterns, vec!["ascending triangle".to_string(), "golden cross".to_string()]);
    }

    #[test]
    fn test_market_context_defaults() {
        let ctx = parse_market_context("nothing useful here");

        assert_eq!(ctx.trend, Trend::Sideways);
        assert_eq!(ctx.volume_profile, VolumeProfile::Stable);
        assert!(ctx.support_levels.is_empty());
        assert!(ctx.patterns.is_empty());
    }

    #[test]
    fn test_market_context_skips_bad_levels() {
        let ctx = parse_market_context("SUPPORT:[around 60k, 58000]\nTREND:[BULLISH]");

        assert_eq!(ctx.support_levels, vec![58000.0]);
        assert_eq!(ctx.trend, Trend::Sideways);
    }
}
