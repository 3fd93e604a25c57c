use super::*;
use crate::coefficient::Integers;
use crate::ops::view::SliceArg;

fn arange(shape: &[usize]) -> Tensor<Integers<i64>> {
    let numel: usize = shape.iter().product();
    Tensor::from_vec((0..numel as i64).collect(), shape.to_vec(), Integers::new()).unwrap()
}

#[test]
fn test_reshape_contiguous_is_view() {
    let t = arange(&[2, 3]);
    let r = t.reshape(&[3, 2]).unwrap();
    assert_eq!(r.shape(), vec![3, 2]);
    assert!(r.shares_storage_with(&t));
    assert_eq!(r.to_vec().unwrap(), t.to_vec().unwrap());

    r.set(&[2, 1], 50).unwrap();
    assert_eq!(t.get(&[1, 2]).unwrap(), 50);
}

#[test]
fn test_reshape_offset_view() {
    // A contiguous row slice keeps its offset.
    let t = arange(&[3, 4]);
    let row = t.slice(&[SliceArg::Index(2)]).unwrap();
    let r = row.reshape(&[2, 2]).unwrap();
    assert!(r.shares_storage_with(&t));
    assert_eq!(r.to_vec().unwrap(), vec![8, 9, 10, 11]);
}

#[test]
fn test_reshape_non_contiguous_copies() {
    let t = arange(&[2, 3]);
    let tt = t.transpose(0, 1).unwrap();
    let r = tt.reshape(&[6]).unwrap();
    assert_eq!(r.to_vec().unwrap(), vec![0, 3, 1, 4, 2, 5]);
    assert!(!r.shares_storage_with(&t));
    assert!(r.is_contiguous());
}

#[test]
fn test_reshape_to_scalar_and_back() {
    let s = Tensor::scalar(4i64, Integers::new());
    let r = s.reshape(&[1, 1]).unwrap();
    assert_eq!(r.get(&[0, 0]).unwrap(), 4);
    let back = r.reshape(&[]).unwrap();
    assert_eq!(back.rank(), 0);
}

#[test]
fn test_reshape_numel_mismatch() {
    let t = arange(&[2, 3]);
    let err = t.reshape(&[4]).unwrap_err();
    assert_eq!(
        err,
        RingTensorError::ShapeMismatch {
            expected: vec![2, 3],
            actual: vec![4],
            operation: "reshape (numel mismatch)".to_string(),
        }
    );
}

#[test]
fn test_copy_and_contiguous() {
    let t = arange(&[2, 2]);
    let c = t.contiguous().unwrap();
    assert!(c.shares_storage_with(&t));
    let d = t.copy().unwrap();
    assert!(!d.shares_storage_with(&t));
    d.set(&[0, 0], 9).unwrap();
    assert_eq!(t.get(&[0, 0]).unwrap(), 0);
}
