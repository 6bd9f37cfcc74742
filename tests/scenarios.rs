use std::path::Path;

use approx::assert_relative_eq;

use numint::configuration::Configuration;
use numint::math::function::fixedintegrand::FixedIntegrand;
use numint::math::function::integrand::Integrand;
use numint::math::quadrature::quadratureerror::QuadratureError;
use numint::math::quadrature::rectanglequadrature::{
    RectangleMethod,
    rectangle_quadrature
};
use numint::math::quadrature::simpsonquadrature::simpson_quadrature;
use numint::math::quadrature::trapezoidalquadrature::trapezoidal_quadrature;

#[test]
fn trapezoidal_linear_is_exact() {
    assert_eq!(trapezoidal_quadrature(|x| x, 0.0, 1.0, 2).unwrap(), 0.5);
}

#[test]
fn simpson_cubic_is_exact() {
    assert_eq!(simpson_quadrature(|x| x.powi(3), 0.0, 1.0, 2).unwrap(), 0.25);
}

#[test]
fn midpoint_constant_is_exact() {
    assert_eq!(rectangle_quadrature(|_| 1.0, 0.0, 10.0, 5, RectangleMethod::Middle).unwrap(), 10.0);
}

#[test]
fn simpson_odd_count_is_invalid_argument() {
    let result = simpson_quadrature(|x| x, 0.0, 1.0, 3);
    assert!(matches!(result, Err(QuadratureError::InvalidArgument(_))));
}

#[test]
fn every_rule_converges_monotonically_on_f1() {
    let f1 = |x| FixedIntegrand::F1.value(x);
    let exact = FixedIntegrand::F1.exact_integral(0.0, 2.0).unwrap();
    let counts = [4, 8, 16, 32, 64, 128];
    let estimators: [(&str, Box<dyn Fn(usize) -> f64>); 5] = [
        ("left", Box::new(move |n| rectangle_quadrature(f1, 0.0, 2.0, n, RectangleMethod::Left).unwrap())),
        ("right", Box::new(move |n| rectangle_quadrature(f1, 0.0, 2.0, n, RectangleMethod::Right).unwrap())),
        ("middle", Box::new(move |n| rectangle_quadrature(f1, 0.0, 2.0, n, RectangleMethod::Middle).unwrap())),
        ("simpson", Box::new(move |n| simpson_quadrature(f1, 0.0, 2.0, n).unwrap())),
        ("trapezoidal", Box::new(move |n| trapezoidal_quadrature(f1, 0.0, 2.0, n).unwrap()))
    ];
    for (name, estimate) in estimators.iter() {
        let errors: Vec<f64> = counts.iter().map(|&n| (estimate(n) - exact).abs()).collect();
        for pair in errors.windows(2) {
            assert!(pair[1] < pair[0], "{}: errors {:?}", name, errors);
        }
    }
}

#[test]
fn sample_configuration_runs() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("json/config.json");
    let config = Configuration::from_reader(&path).unwrap();
    let reports = config.evaluate_all().unwrap();
    assert_eq!(reports.len(), 3);

    let third = config.evaluate("3rd Integral Result").unwrap();
    let exact = FixedIntegrand::F3.exact_integral(-1.0, 1.0).unwrap();
    assert_relative_eq!(third.value_of("Trapezoidal Rule").unwrap(), exact, epsilon = 1e-3);
    assert_relative_eq!(third.value_of("Midpoint Method").unwrap(), exact, epsilon = 1e-3);
}
