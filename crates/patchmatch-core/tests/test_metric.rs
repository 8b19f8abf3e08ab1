use approx::assert_relative_eq;
use ndarray::Array3;
use patchmatch_core::metric::{DistanceKind, PatchDistance};
use patchmatch_core::PatchMatchError;

fn patch(values: &[f64], channels: usize) -> Array3<f64> {
    let side = ((values.len() / channels) as f64).sqrt() as usize;
    Array3::from_shape_vec((side, side, channels), values.to_vec()).unwrap()
}

#[test]
fn test_l1_sums_absolute_differences() {
    let a = patch(&[1.0, 2.0, 3.0, 4.0], 1);
    let b = patch(&[0.0, 2.0, 5.0, 1.0], 1);
    let d = DistanceKind::L1.metric().distance(&a.view(), &b.view());
    assert_relative_eq!(d, 6.0);
}

#[test]
fn test_l2_is_frobenius_norm() {
    let a = patch(&[0.0, 0.0, 0.0, 0.0], 1);
    let b = patch(&[3.0, 0.0, 0.0, 4.0], 1);
    let d = DistanceKind::L2.metric().distance(&a.view(), &b.view());
    assert_relative_eq!(d, 5.0);
}

#[test]
fn test_metrics_cover_every_channel() {
    let a = patch(&[0.0; 12], 3);
    let mut values = [0.0f64; 12];
    values[2] = 1.0;
    values[11] = 2.0;
    let b = patch(&values, 3);
    assert_relative_eq!(DistanceKind::L1.metric().distance(&a.view(), &b.view()), 3.0);
    assert_relative_eq!(
        DistanceKind::L2.metric().distance(&a.view(), &b.view()),
        5.0f64.sqrt()
    );
}

#[test]
fn test_metrics_are_symmetric_and_zero_on_identity() {
    let a = patch(&[0.1, 0.7, 0.3, 0.9, 0.2, 0.4, 0.8, 0.5, 0.6], 1);
    let b = patch(&[0.5, 0.2, 0.9, 0.1, 0.6, 0.3, 0.4, 0.7, 0.8], 1);
    for kind in [DistanceKind::L1, DistanceKind::L2] {
        let m = kind.metric();
        assert_eq!(m.distance(&a.view(), &a.view()), 0.0);
        assert_relative_eq!(
            m.distance(&a.view(), &b.view()),
            m.distance(&b.view(), &a.view())
        );
        assert!(m.distance(&a.view(), &b.view()) > 0.0);
    }
}

#[test]
fn test_distance_kind_parses_case_insensitively() {
    assert_eq!("l1".parse::<DistanceKind>().unwrap(), DistanceKind::L1);
    assert_eq!(" L2 ".parse::<DistanceKind>().unwrap(), DistanceKind::L2);
}

#[test]
fn test_unknown_distance_is_a_configuration_error() {
    let err = "linf".parse::<DistanceKind>().unwrap_err();
    assert!(matches!(err, PatchMatchError::Configuration(_)));
    assert!(err.to_string().contains("linf"));
}
