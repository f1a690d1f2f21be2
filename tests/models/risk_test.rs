#[cfg(test)]
mod tests {
    use vital_triage::models::risk::*;
    use vital_triage::models::vitals::VitalField;

    fn contribution(name: &'static str, weight: f64) -> IndicatorContribution {
        IndicatorContribution {
            name,
            source: VitalField::HeartRate,
            weight,
        }
    }

    #[test]
    fn test_score_orders_indicators_by_weight() {
        let score = RiskScore::new(
            RiskCategory::Cardiac,
            0.5,
            vec![
                contribution("weak", 0.2),
                contribution("strong", 0.9),
                contribution("middling", 0.5),
            ],
        );

        let names: Vec<_> = score.indicators.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["strong", "middling", "weak"]);
    }

    #[test]
    fn test_equal_weights_keep_declaration_order() {
        let score = RiskScore::new(
            RiskCategory::Shock,
            0.5,
            vec![
                contribution("first", 0.4),
                contribution("second", 0.4),
                contribution("third", 0.4),
            ],
        );

        let names: Vec<_> = score.indicators.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_confidence_clamped() {
        let high = RiskScore::new(RiskCategory::Shock, 1.7, vec![]);
        assert!((high.confidence - 1.0).abs() < 1e-12);

        let low = RiskScore::new(RiskCategory::Shock, -0.3, vec![]);
        assert!(low.confidence.abs() < 1e-12);
    }

    #[test]
    fn test_dominant_category_positional_tie_break() {
        let scores = RiskScores {
            shock: RiskScore::new(RiskCategory::Shock, 0.5, vec![]),
            cardiac: RiskScore::new(RiskCategory::Cardiac, 0.5, vec![]),
            respiratory: RiskScore::new(RiskCategory::Respiratory, 0.5, vec![]),
        };
        // Equal confidences resolve to the first declared category.
        assert_eq!(scores.dominant_category(), RiskCategory::Shock);

        let scores = RiskScores {
            shock: RiskScore::new(RiskCategory::Shock, 0.2, vec![]),
            cardiac: RiskScore::new(RiskCategory::Cardiac, 0.4, vec![]),
            respiratory: RiskScore::new(RiskCategory::Respiratory, 0.9, vec![]),
        };
        assert_eq!(scores.dominant_category(), RiskCategory::Respiratory);
        assert!((scores.max_confidence() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(RiskCategory::Shock.to_string(), "shock");
        assert_eq!(RiskCategory::ALL.len(), 3);
    }
}
