//! Integration tests for the regreport public surface

use serde_json::json;

use regreport::{
    classify, extract_coefficients, render_comparison, render_report, EffectKind, ModelKind,
    Options, OrdinaryResult, PanelResult, RegressionResult, ReportError, SummaryTable,
};

fn sample_ordinary() -> RegressionResult {
    RegressionResult::Ordinary(OrdinaryResult {
        formula: "ret ~ mkt + smb + hml".to_string(),
        nobs: 1260,
        residuals: vec![-2.5, -0.75, -0.1, 0.0, 0.2, 0.8, 2.1],
        summary: SummaryTable::new(
            ["", "coef", "std err", "t", "P>|t|"],
            [
                ["Intercept", "0.0012", "0.0004", "3.0", "0.0027"],
                ["mkt", "1.0133", "0.0211", "48.0", "0.0"],
                ["smb", "0.1898", "0.0311", "6.1", "0.0"],
                ["hml", "-0.2254", "0.0299", "-7.5", "0.0"],
            ],
        ),
        r_squared: 0.7432,
        adj_r_squared: 0.7426,
        f_statistic: 1211.234,
        df_model: 3,
        df_resid: 1256,
        f_pvalue: 0.0,
    })
}

fn sample_panel(included: Vec<EffectKind>, cov_type: &str) -> RegressionResult {
    RegressionResult::Panel(PanelResult {
        formula: "invest ~ value + capital".to_string(),
        nobs: 2200,
        residuals: vec![-1.0, -0.2, 0.0, 0.3, 1.1],
        summary: SummaryTable::new(
            ["", "Parameter", "Std. Err.", "T-stat", "P-value"],
            [
                ["value", "0.1101", "0.0119", "9.25", "0.0"],
                ["capital", "0.3103", "0.0173", "17.9", "0.0"],
            ],
        ),
        rsquared_inclusive: 0.7667,
        rsquared_within: 0.7234,
        f_statistic: 340.08,
        f_pvalue: 0.0,
        cov_type: cov_type.to_string(),
        included_effects: included,
        entity_count: 11.0,
        time_count: 20.0,
    })
}

#[test]
fn test_full_report_section_order() {
    let options = Options::new().with_residuals();
    let report = render_report(&sample_ordinary(), &options).unwrap();

    let header = report.find("OLS Model:").unwrap();
    let residuals = report.find("Residuals:").unwrap();
    let coefficients = report.find("Coefficients:").unwrap();
    let footer = report.find("Summary statistics:").unwrap();
    assert!(header < residuals && residuals < coefficients && coefficients < footer);
}

#[test]
fn test_coefficients_section_row_count() {
    let report = render_report(&sample_ordinary(), &Options::new()).unwrap();
    assert_eq!(report.matches("Coefficients:").count(), 1);

    let section = report
        .split("Coefficients:\n")
        .nth(1)
        .unwrap()
        .split("\n\n")
        .next()
        .unwrap();
    assert_eq!(section.lines().count(), 1 + 4);
}

#[test]
fn test_repeated_rendering_is_byte_identical() {
    let options = Options::new().with_residuals().with_digits(4);
    let result = sample_ordinary();
    assert_eq!(
        render_report(&result, &options).unwrap(),
        render_report(&result, &options).unwrap()
    );
}

#[test]
fn test_z_statistic_fallback_end_to_end() {
    let payload = json!({
        "kind": "statsmodels.regression.linear_model.RegressionResultsWrapper",
        "formula": "default ~ leverage",
        "nobs": 400,
        "residuals": [-0.9, 0.0, 0.9],
        "summary": {
            "headers": ["", "coef", "std err", "z", "P>|z|"],
            "rows": [["leverage", "0.4567", "0.0999", "4.57", "0.0211"]]
        },
        "r_squared": 0.21,
        "adj_r_squared": 0.208,
        "f_statistic": 20.9,
        "df_model": 1,
        "df_resid": 398,
        "f_pvalue": 0.0001
    });
    let result = RegressionResult::from_value(payload).unwrap();

    let tables = extract_coefficients(&result, 3);
    assert_eq!(tables.mean[0].statistic, Some(4.57));
    assert_eq!(tables.mean[0].p_value, Some(0.021));

    let report = render_report(&result, &Options::new()).unwrap();
    assert!(report.contains("4.570"));
    assert!(report.contains("0.021"));
}

#[test]
fn test_formula_wrapping_property() {
    let mut result = sample_ordinary();
    if let RegressionResult::Ordinary(r) = &mut result {
        r.formula = "y ~ x1 + x2 + x3".to_string();
    }
    let report = render_report(&result, &Options::new().with_max_width(10)).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[1], "y ~ x1");
    assert_eq!(lines[2], " + x2 + x3");
}

#[test]
fn test_label_truncation_width() {
    let mut result = sample_ordinary();
    if let RegressionResult::Ordinary(r) = &mut result {
        r.summary.rows[1][0] = "industry_adjusted_momentum_exposure".to_string();
    }
    let report = render_report(&result, &Options::new()).unwrap();

    // Each value renders 5-6 characters wide; the four joined cells are
    // 24 wide for this row, so 64 - 24 - 23 = 17 characters survive.
    let truncated = report
        .lines()
        .find(|line| line.contains("..."))
        .unwrap();
    let label = truncated.split_whitespace().next().unwrap();
    assert_eq!(label, "industry_adjusted...");
    assert_eq!(label.len(), 20);
}

#[test]
fn test_invalid_option_key_rejected_before_rendering() {
    let err = Options::from_value(&json!({ "digits": 2, "style": "wide" })).unwrap_err();
    assert!(matches!(err, ReportError::InvalidOption { ref key, .. } if key == "style"));
}

#[test]
fn test_unsupported_payload_rejected_on_tag_alone() {
    // Attribute-compatible payload under a foreign tag must not classify
    let mut value = serde_json::to_value(&sample_ordinary()).unwrap();
    value["kind"] = json!("sklearn.linear_model.LinearRegression");
    let err = RegressionResult::from_value(value).unwrap_err();
    assert!(matches!(err, ReportError::UnsupportedResult { .. }));
    assert_eq!(classify("sklearn.linear_model.LinearRegression"), None);
}

#[test]
fn test_classification_tags() {
    assert_eq!(classify(ModelKind::Ordinary.tag()), Some(ModelKind::Ordinary));
    assert_eq!(classify(ModelKind::Panel.tag()), Some(ModelKind::Panel));
    assert_eq!(
        classify(ModelKind::Volatility.tag()),
        Some(ModelKind::Volatility)
    );
}

#[test]
fn test_panel_report_has_fixed_effects_and_cov_type() {
    let report = render_report(
        &sample_panel(vec![EffectKind::Entity, EffectKind::Time], "clustered"),
        &Options::new(),
    )
    .unwrap();
    assert!(report.contains("Panel OLS Model:"));
    assert!(report.contains("Fixed effects:"));
    assert!(report.contains("Entity  Time"));
    assert!(report.contains("- Covariance type: clustered"));
}

#[test]
fn test_comparison_outer_union() {
    let mut second = sample_panel(vec![EffectKind::Entity], "robust");
    if let RegressionResult::Panel(p) = &mut second {
        p.summary = SummaryTable::new(
            ["", "Parameter", "Std. Err.", "T-stat", "P-value"],
            [
                ["capital", "0.29", "0.02", "14.5", "0.0"],
                ["cashflow", "0.12", "0.03", "4.0", "0.0001"],
            ],
        );
    }
    let models = vec![
        sample_panel(vec![EffectKind::Entity, EffectKind::Time], "clustered"),
        second,
    ];
    let output = render_comparison(&models, 3).unwrap();

    // Union of {value, capital} and {capital, cashflow}
    for name in ["value", "capital", "cashflow"] {
        assert!(
            output.lines().any(|line| line.starts_with(name)),
            "missing row '{name}'"
        );
    }
    // value is absent from model 2, cashflow from model 1
    let value_line = output.lines().find(|l| l.starts_with("value")).unwrap();
    assert_eq!(value_line.matches('(').count(), 1);
    let cashflow_line = output.lines().find(|l| l.starts_with("cashflow")).unwrap();
    assert_eq!(cashflow_line.matches('(').count(), 1);
    // capital appears in both columns
    let capital_line = output.lines().find(|l| l.starts_with("capital")).unwrap();
    assert_eq!(capital_line.matches('(').count(), 2);
}

#[test]
fn test_comparison_rejects_mixed_kinds() {
    let models = vec![
        sample_panel(vec![EffectKind::Entity], "robust"),
        sample_ordinary(),
    ];
    let err = render_comparison(&models, 3).unwrap_err();
    assert!(matches!(
        err,
        ReportError::MixedComparison {
            kind: ModelKind::Ordinary,
            index: 1
        }
    ));
}

#[test]
fn test_typed_results_round_trip_through_json() {
    for result in [
        sample_ordinary(),
        sample_panel(vec![EffectKind::Time], "robust"),
    ] {
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["kind"], result.kind().tag());
        let back = RegressionResult::from_value(value).unwrap();
        assert_eq!(back, result);
    }
}
