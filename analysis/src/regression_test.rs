use crate::regression::Polynomial;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6 * b.abs().max(1.0)
}

#[test]
pub fn linear_fit_recovers_line() {
    let points = [1000.0, 5000.0, 9000.0, 20000.0].map(|x: f64| (x, 0.002 * x + 1.0));

    let line = Polynomial::fit(&points, 1).unwrap();

    assert_eq!(line.degree(), 1);
    for x in [0.0, 1000.0, 12345.0, 40000.0] {
        assert!(close(line.evaluate(x), 0.002 * x + 1.0), "at {x}");
    }
}

#[test]
pub fn quadratic_fit_recovers_parabola() {
    let curve = |x: f64| 3e-9 * x * x - 1e-5 * x + 0.25;
    let points = [2000.0, 6000.0, 10000.0, 14000.0, 22000.0, 24000.0].map(|x: f64| (x, curve(x)));

    let parabola = Polynomial::fit(&points, 2).unwrap();

    for x in [2000.0, 8000.0, 18000.0] {
        assert!(close(parabola.evaluate(x), curve(x)), "at {x}");
    }
}

#[test]
pub fn linear_fit_of_noisy_points_is_least_squares() {
    // best line through (0,0), (1,1), (2,1) is y = 0.5x + 1/6
    let line = Polynomial::fit(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0)], 1).unwrap();

    assert!(close(line.evaluate(0.0), 1.0 / 6.0));
    assert!(close(line.evaluate(2.0), 1.0 + 1.0 / 6.0));
}

#[test]
pub fn too_few_distinct_sizes() {
    assert!(Polynomial::fit(&[], 1).is_none());
    assert!(Polynomial::fit(&[(100.0, 0.5)], 1).is_none());
    assert!(Polynomial::fit(&[(100.0, 0.5), (100.0, 0.7)], 1).is_none());
    assert!(Polynomial::fit(&[(100.0, 0.5), (200.0, 0.7)], 2).is_none());
    assert!(Polynomial::fit(&[(100.0, 0.5), (200.0, 0.7)], 1).is_some());
}

#[test]
pub fn sample_spans_both_ends() {
    let line = Polynomial::fit(&[(0.0, 1.0), (10.0, 21.0)], 1).unwrap();
    let samples = line.sample(0.0, 10.0, 11);

    assert_eq!(samples.len(), 11);
    assert!(close(samples[0].0, 0.0) && close(samples[0].1, 1.0));
    assert!(close(samples[10].0, 10.0) && close(samples[10].1, 21.0));
    assert!(close(samples[5].1, 11.0));
}
