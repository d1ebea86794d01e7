
use approx::{assert_abs_diff_eq, assert_relative_eq};
use bs_heatmap_lib::{
    black_scholes, evaluate, price_and_greeks, BsError, MarketInputs, OptionKind,
    SensitivityReport,
};
use test_utils::{atm_inputs, evaluate_ok, parity_gap};

/// Reference scenario from the textbook case; tolerance 1e-2 on the quoted values.
#[test]
fn test_atm_reference_scenario() {
    let report = evaluate(&atm_inputs()).expect("ATM evaluation failed");

    assert_abs_diff_eq!(report.call_price, 10.45, epsilon = 1e-2);
    assert_abs_diff_eq!(report.put_price, 5.57, epsilon = 1e-2);
    assert_abs_diff_eq!(report.call_delta, 0.6368, epsilon = 1e-2);
    assert_abs_diff_eq!(report.gamma, 0.0188, epsilon = 1e-2);
    assert_abs_diff_eq!(report.vega, 37.52, epsilon = 1e-2);
}

/// Put-call parity on the second reference scenario: call − put = 10 − 10·e^(−0.075).
#[test]
fn test_parity_reference_scenario() {
    let report = evaluate_ok(10.0, 10.0, 1.5, 0.05, 0.2);
    assert_abs_diff_eq!(
        report.call_price - report.put_price,
        0.722_565_136_714_472,
        epsilon = 1e-10
    );
}

#[test]
fn test_boundary_inputs_fail() {
    let cases = [
        (0.0, 100.0, 1.0, 0.05, 0.2, "spot"),
        (100.0, -5.0, 1.0, 0.05, 0.2, "strike"),
        (100.0, 100.0, 0.0, 0.05, 0.2, "time_to_expiry"),
        (100.0, 100.0, 1.0, 0.05, 0.0, "volatility"),
    ];

    for (s, k, t, r, v, field) in cases {
        let inputs = MarketInputs {
            spot: s,
            strike: k,
            time_to_expiry: t,
            risk_free_rate: r,
            volatility: v,
        };
        match evaluate(&inputs) {
            Err(BsError::InvalidInput { name, .. }) => assert_eq!(name, field),
            other => panic!("expected InvalidInput for {}, got {:?}", field, other),
        }
        assert!(price_and_greeks(s, k, t, r, v).is_err());
    }
}

#[test]
fn test_put_delta_and_shared_greeks() {
    for &(s, k, t, r, v) in &[
        (80.0, 100.0, 0.25, 0.01, 0.3),
        (120.0, 100.0, 2.0, 0.03, 0.15),
        (100.0, 90.0, 0.1, -0.005, 0.6),
    ] {
        let report = evaluate_ok(s, k, t, r, v);
        assert_relative_eq!(report.put_delta, report.call_delta - 1.0, epsilon = 1e-15);
        assert!(report.gamma > 0.0);
        assert!(report.vega > 0.0);
        // vanna and volga follow from vega, d1 and d2
        assert_relative_eq!(report.vanna, report.vega * report.d1 / v, max_relative = 1e-12);
        assert_relative_eq!(
            report.volga,
            report.vega * report.d1 * report.d2 / v,
            max_relative = 1e-12
        );
    }
}

/// Central-difference bump of one input, evaluated up and down.
fn bumped(shift: impl Fn(f64) -> MarketInputs, h: f64) -> (SensitivityReport, SensitivityReport) {
    let up = evaluate(&shift(h)).expect("bumped up");
    let dn = evaluate(&shift(-h)).expect("bumped down");
    (up, dn)
}

/// Greeks agree with central finite differences of the prices.
#[test]
fn test_greeks_match_finite_differences() {
    let base = MarketInputs::new(105.0, 100.0, 0.75, 0.03, 0.25).unwrap();
    let report = evaluate(&base).unwrap();

    let h = 1e-3;
    let (up, dn) = bumped(|d| base.with_spot(base.spot + d), h);
    let fd = |a: f64, b: f64| (a - b) / (2.0 * h);
    assert_relative_eq!(fd(up.call_price, dn.call_price), report.call_delta, max_relative = 1e-6);
    assert_relative_eq!(fd(up.put_price, dn.put_price), report.put_delta, max_relative = 1e-6);
    assert_relative_eq!(fd(up.call_delta, dn.call_delta), report.gamma, max_relative = 1e-5);

    let h = 1e-5;
    let fd = |a: f64, b: f64| (a - b) / (2.0 * h);
    let (up, dn) = bumped(|d| base.with_volatility(base.volatility + d), h);
    assert_relative_eq!(fd(up.call_price, dn.call_price), report.vega, max_relative = 1e-6);
    assert_relative_eq!(fd(up.vega, dn.vega), report.volga, max_relative = 1e-4);

    let (up, dn) = bumped(
        |d| MarketInputs {
            risk_free_rate: base.risk_free_rate + d,
            ..base
        },
        h,
    );
    assert_relative_eq!(fd(up.call_price, dn.call_price), report.call_rho, max_relative = 1e-6);
    assert_relative_eq!(fd(up.put_price, dn.put_price), report.put_rho, max_relative = 1e-6);

    // Theta is the derivative with respect to calendar time, i.e. minus d/dT
    let (up, dn) = bumped(
        |d| MarketInputs {
            time_to_expiry: base.time_to_expiry + d,
            ..base
        },
        h,
    );
    assert_relative_eq!(-fd(up.call_price, dn.call_price), report.call_theta, max_relative = 1e-5);
    assert_relative_eq!(-fd(up.put_price, dn.put_price), report.put_theta, max_relative = 1e-5);
}

#[test]
fn test_call_theta_negative_near_the_money() {
    let report = evaluate(&atm_inputs()).unwrap();
    assert!(report.call_theta < 0.0);
}

#[test]
fn test_parity_across_moneyness() {
    for spot in [50.0, 80.0, 100.0, 125.0, 200.0] {
        let inputs = MarketInputs::new(spot, 100.0, 1.0, 0.05, 0.2).unwrap();
        let report = evaluate(&inputs).unwrap();
        assert!(parity_gap(&inputs, &report).abs() < 1e-9);
    }
}

#[test]
fn test_selector_wrapper() {
    let report = evaluate(&atm_inputs()).unwrap();
    assert_eq!(
        black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "call").unwrap(),
        report.price(OptionKind::Call)
    );
    assert_eq!(
        black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "Put").unwrap(),
        report.price(OptionKind::Put)
    );

    match black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "swaption") {
        Err(BsError::InvalidOptionKind(tag)) => assert_eq!(tag, "swaption"),
        other => panic!("expected InvalidOptionKind, got {:?}", other),
    }
}

/// Deep out-of-the-money options stay non-negative and finite.
#[test]
fn test_far_wings_are_stable() {
    let deep_otm_call = evaluate_ok(50.0, 200.0, 0.5, 0.05, 0.2);
    assert!(deep_otm_call.call_price >= 0.0);
    assert!(deep_otm_call.call_price.is_finite());
    assert!(deep_otm_call.call_delta >= 0.0);

    let deep_otm_put = evaluate_ok(200.0, 50.0, 0.5, 0.05, 0.2);
    assert!(deep_otm_put.put_price >= 0.0);
    assert!(deep_otm_put.put_delta <= 0.0);
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serialises_with_named_fields() {
    let report = evaluate(&atm_inputs()).unwrap();
    let text = toml::to_string(&report).unwrap();
    assert!(text.contains("call_price"));
    assert!(text.contains("volga"));
}
