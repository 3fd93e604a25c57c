use super::*;
use crate::coefficient::Integers;

fn z() -> Integers<i64> {
    Integers::new()
}

#[test]
fn test_trace_matrix() {
    let m = Tensor::from_fn(&[3, 3], z(), |i| (i[0] * 3 + i[1]) as i64).unwrap();
    assert_eq!(trace_op(&m, 0, 1, 0).unwrap().item().unwrap(), 12);
    assert_eq!(trace_op(&m, 0, 1, 1).unwrap().item().unwrap(), 1 + 5);
    assert_eq!(trace_op(&m, 0, 1, -2).unwrap().item().unwrap(), 6);
}

#[test]
fn test_trace_out_of_range_offset_is_zero() {
    let m = Tensor::from_fn(&[2, 2], z(), |i| (i[0] + i[1]) as i64 + 1).unwrap();
    assert_eq!(trace_op(&m, 0, 1, 5).unwrap().item().unwrap(), 0);
}

#[test]
fn test_trace_batched_matches_sum_of_diagonal() {
    let t = Tensor::from_fn(&[2, 3, 3], z(), |i| (i[0] * 9 + i[1] * 3 + i[2]) as i64).unwrap();
    let tr = trace_op(&t, 1, 2, 0).unwrap();
    assert_eq!(tr.shape(), vec![2]);
    assert_eq!(tr.to_vec().unwrap(), vec![12, 39]);
    let diag = t.diagonal(1, 2, 0).unwrap();
    assert_eq!(tr, diag.sum(&[1]).unwrap());
}

#[test]
fn test_trace_errors() {
    let m = Tensor::from_fn(&[2, 2], z(), |_| 1).unwrap();
    assert_eq!(
        trace_op(&m, 0, 2, 0).unwrap_err(),
        RingTensorError::InvalidAxis { axis: 2, rank: 2 }
    );
    assert_eq!(
        trace_op(&m, 1, 1, 0).unwrap_err(),
        RingTensorError::DuplicateAxis { axis: 1 }
    );
}
