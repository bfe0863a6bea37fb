use approx::assert_relative_eq;
use solar_projection::{
    compute,
    parameters::{load_overrides_from_reader, ProjectParameters},
    ProjectionEngine, ProjectionError,
};

#[test]
fn reference_project_indicators() {
    let result = compute(&ProjectParameters::default()).expect("default projection");
    let summary = &result.summary;

    assert_relative_eq!(summary.net_present_value, 4_201_058_437.82, epsilon = 0.01);
    assert_relative_eq!(summary.internal_rate_of_return.unwrap(), 16.30, epsilon = 1e-9);
    assert_eq!(summary.simple_payback_year, Some(3));
    assert_eq!(summary.discounted_payback_year, Some(3));
    assert_relative_eq!(result.total_net_cash_flow(), 15_249_724_423.43, epsilon = 0.01);
}

#[test]
fn reference_project_last_year() {
    let result = compute(&ProjectParameters::default()).unwrap();
    let last = result.year(25).expect("year 25 inside horizon");

    assert_eq!(last.tax_deduction, 0.0);
    assert_relative_eq!(last.net_cash_flow, 1_514_292_220.31, epsilon = 0.01);
    assert_relative_eq!(last.discounted_cash_flow, 221_113_777.44, epsilon = 0.01);
    assert!(result.year(26).is_none());
    assert!(result.year(0).is_none());
}

#[test]
fn record_count_and_order_follow_horizon() {
    for lifetime_years in [1, 7, 25, 40] {
        let params = ProjectParameters {
            lifetime_years,
            ..Default::default()
        };
        let result = compute(&params).unwrap();

        assert_eq!(result.len(), lifetime_years as usize);
        let years: Vec<u32> = result.records.iter().map(|r| r.year).collect();
        assert_eq!(years, (1..=lifetime_years).collect::<Vec<u32>>());
    }
}

#[test]
fn cumulative_sums_are_prefix_sums() {
    let result = compute(&ProjectParameters::default()).unwrap();
    let records = &result.records;

    assert_eq!(records[0].cumulative_net, records[0].net_cash_flow);
    assert_eq!(records[0].cumulative_discounted, records[0].discounted_cash_flow);
    for pair in records.windows(2) {
        assert_eq!(pair[1].cumulative_net, pair[0].cumulative_net + pair[1].net_cash_flow);
        assert_eq!(
            pair[1].cumulative_discounted,
            pair[0].cumulative_discounted + pair[1].discounted_cash_flow
        );
    }
}

#[test]
fn cumulative_net_strictly_increasing_under_defaults() {
    let result = compute(&ProjectParameters::default()).unwrap();

    assert!(result.records.iter().all(|r| r.net_cash_flow > 0.0));
    for pair in result.records.windows(2) {
        assert!(pair[1].cumulative_net > pair[0].cumulative_net);
    }
}

#[test]
fn tax_deduction_only_inside_window() {
    let params = ProjectParameters {
        deduction_years: 4,
        lifetime_years: 10,
        ..Default::default()
    };
    let annual = params.annual_deduction();
    let result = compute(&params).unwrap();

    for r in &result.records {
        let expected = if r.year <= 4 { annual } else { 0.0 };
        assert_eq!(r.tax_deduction, expected, "year {}", r.year);
    }
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let params = ProjectParameters::default();
    let first = compute(&params).unwrap();
    let second = ProjectionEngine::new(params).unwrap().project().unwrap();

    assert_eq!(first, second);
    for (a, b) in first.records.iter().zip(&second.records) {
        assert_eq!(a.discounted_cash_flow.to_bits(), b.discounted_cash_flow.to_bits());
    }
}

#[test]
fn unreachable_investment_leaves_payback_undefined() {
    let params = ProjectParameters {
        initial_investment: 50_000_000_000.0,
        total_tax_deduction: 0.0,
        ..Default::default()
    };
    let result = compute(&params).unwrap();

    assert!(params.initial_investment > result.total_net_cash_flow());
    assert_eq!(result.summary.simple_payback_year, None);
    assert_eq!(result.summary.discounted_payback_year, None);
    assert!(result.summary.net_present_value < 0.0);
}

#[test]
fn discounted_payback_never_precedes_simple() {
    let params = ProjectParameters {
        monthly_client_consumption: 3_000.0,
        ..Default::default()
    };
    let summary = compute(&params).unwrap().summary;

    let simple = summary.simple_payback_year.expect("simple payback reached");
    let discounted = summary.discounted_payback_year.expect("discounted payback reached");
    assert!(discounted >= simple);
}

#[test]
fn negative_total_flow_has_no_irr() {
    let params = ProjectParameters {
        annual_om_cost: 10_000_000_000.0,
        ..Default::default()
    };
    let summary = compute(&params).unwrap().summary;

    assert_eq!(summary.internal_rate_of_return, None);
    assert_eq!(summary.simple_payback_year, None);
}

#[test]
fn invalid_parameters_fail_before_projection() {
    let cases = [
        ProjectParameters { lifetime_years: 0, ..Default::default() },
        ProjectParameters { initial_investment: -5.0, ..Default::default() },
        ProjectParameters { discount_rate: -1.0, ..Default::default() },
        ProjectParameters { tariff_inflation_rate: f64::INFINITY, ..Default::default() },
        ProjectParameters { monthly_client_consumption: 0.0, ..Default::default() },
    ];

    for params in cases {
        match compute(&params) {
            Err(ProjectionError::InvalidParameter { .. }) => {}
            other => panic!("expected InvalidParameter for {:?}, got {:?}", params, other),
        }
    }
}

#[test]
fn oversized_horizon_rejected_before_projection() {
    for lifetime_years in [10_000, u32::MAX] {
        let params = ProjectParameters { lifetime_years, ..Default::default() };
        match compute(&params) {
            Err(ProjectionError::InvalidParameter { name, .. }) => assert_eq!(name, "lifetime_years"),
            other => panic!("expected InvalidParameter for {}, got {:?}", lifetime_years, other),
        }
    }
}

#[test]
fn non_finite_projection_is_never_returned() {
    let params = ProjectParameters {
        tariff_inflation_rate: 1e300,
        lifetime_years: 3,
        ..Default::default()
    };
    assert!(compute(&params).unwrap_err().is_invalid_parameter());
}

#[test]
fn parameter_file_overrides_defaults() {
    let json = r#"{ "initial_investment": 100000000, "discount_rate": 0.12 }"#;
    let params = load_overrides_from_reader(json.as_bytes())
        .unwrap()
        .apply(&ProjectParameters::default());

    assert_eq!(params.total_tax_deduction, 50_000_000.0);
    assert_eq!(params.lifetime_years, 25);

    let result = compute(&params).unwrap();
    assert_eq!(result.summary.simple_payback_year, Some(1));
}
