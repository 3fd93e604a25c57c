use super::*;
use crate::coefficient::Integers;

fn arange(shape: &[usize]) -> Tensor<Integers<i64>> {
    let numel: usize = shape.iter().product();
    Tensor::from_vec((0..numel as i64).collect(), shape.to_vec(), Integers::new()).unwrap()
}

#[test]
fn test_slice_basic() {
    let t = arange(&[2, 2, 3]);
    let sliced = t
        .slice(&[SliceArg::range(0, 1), SliceArg::range(0, 2), SliceArg::range(1, 3)])
        .unwrap();
    assert_eq!(sliced.shape(), vec![1, 2, 2]);
    assert_eq!(sliced.to_vec().unwrap(), vec![1, 2, 4, 5]);
    assert!(sliced.shares_storage_with(&t));
}

#[test]
fn test_slice_index_drops_axis() {
    let t = arange(&[3, 4]);
    let row = t.slice(&[SliceArg::Index(1)]).unwrap();
    assert_eq!(row.shape(), vec![4]);
    assert_eq!(row.to_vec().unwrap(), vec![4, 5, 6, 7]);

    let col = t.slice(&[SliceArg::Full, SliceArg::Index(-1)]).unwrap();
    assert_eq!(col.shape(), vec![3]);
    assert_eq!(col.to_vec().unwrap(), vec![3, 7, 11]);
}

#[test]
fn test_slice_negative_step_reverses() {
    let t = arange(&[2, 3]);
    let rev = t.slice(&[SliceArg::reversed(), SliceArg::reversed()]).unwrap();
    assert_eq!(rev.strides(), vec![-3, -1]);
    assert_eq!(rev.to_vec().unwrap(), vec![5, 4, 3, 2, 1, 0]);

    let every_other = arange(&[6]).slice(&[SliceArg::stepped(Some(5), None, -2)]).unwrap();
    assert_eq!(every_other.to_vec().unwrap(), vec![5, 3, 1]);
}

#[test]
fn test_slice_empty_dim() {
    let t = arange(&[2, 2, 3]);
    let sliced = t.slice(&[SliceArg::range(1, 1)]).unwrap();
    assert_eq!(sliced.shape(), vec![0, 2, 3]);
    assert_eq!(sliced.numel(), 0);
    assert!(sliced.to_vec().unwrap().is_empty());
}

#[test]
fn test_slice_ellipsis_and_new_axis() {
    let t = arange(&[2, 3, 4]);
    let last = t.slice(&[SliceArg::Ellipsis, SliceArg::Index(0)]).unwrap();
    assert_eq!(last.shape(), vec![2, 3]);
    assert_eq!(last.to_vec().unwrap(), vec![0, 4, 8, 12, 16, 20]);

    let expanded = t.slice(&[SliceArg::NewAxis, SliceArg::Ellipsis]).unwrap();
    assert_eq!(expanded.shape(), vec![1, 2, 3, 4]);

    let double = t.slice(&[SliceArg::Ellipsis, SliceArg::Ellipsis]);
    assert!(matches!(double, Err(RingTensorError::SliceError { .. })));
}

#[test]
fn test_slice_errors() {
    let t = arange(&[2, 2]);
    assert!(matches!(
        t.slice(&[SliceArg::Index(2)]),
        Err(RingTensorError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        t.slice(&[SliceArg::Index(-3)]),
        Err(RingTensorError::IndexOutOfBounds { .. })
    ));
    assert_eq!(
        t.slice(&[SliceArg::Full, SliceArg::Full, SliceArg::Full]).unwrap_err(),
        RingTensorError::RankMismatch { expected: 2, actual: 3 }
    );
    assert!(matches!(
        t.slice(&[SliceArg::stepped(None, None, 0)]),
        Err(RingTensorError::SliceError { .. })
    ));
}

#[test]
fn test_slice_write_aliases_source() {
    let t = arange(&[3, 3]);
    let view = t.slice(&[SliceArg::range(1, 3), SliceArg::stepped(None, None, 2)]).unwrap();
    assert_eq!(view.to_vec().unwrap(), vec![3, 5, 6, 8]);

    view.set(&[1, 1], 100).unwrap();
    assert_eq!(t.get(&[2, 2]).unwrap(), 100);

    t.set(&[1, 0], -7).unwrap();
    assert_eq!(view.get(&[0, 0]).unwrap(), -7);

    // An overlapping view sees both writes.
    let other = t.slice(&[SliceArg::Full, SliceArg::Index(-1)]).unwrap();
    assert_eq!(other.to_vec().unwrap(), vec![2, 5, 100]);
}

#[test]
fn test_slice_huge_steps_select_one_end() {
    let t = arange(&[5]);
    let first = slice_op(&t, &[SliceArg::stepped(None, None, isize::MAX)]).unwrap();
    assert_eq!(first.shape(), vec![1]);
    assert_eq!(first.to_vec().unwrap(), vec![0]);
    let last = slice_op(&t, &[SliceArg::stepped(None, None, isize::MIN)]).unwrap();
    assert_eq!(last.to_vec().unwrap(), vec![4]);
}
