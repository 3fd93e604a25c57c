use crate::coefficient::{Integers, ModularIntegers};
use crate::error::RingTensorError;
use crate::ops::view::SliceArg;
use crate::tensor::Tensor;

fn arange(shape: &[usize]) -> Tensor<Integers<i64>> {
    let numel: usize = shape.iter().product();
    Tensor::from_vec((0..numel as i64).collect(), shape.to_vec(), Integers::new()).unwrap()
}

#[test]
fn test_fill_view_sets_region() {
    let t = arange(&[3, 3]);
    let block = t.slice(&[SliceArg::range(0, 2), SliceArg::range(1, 3)]).unwrap();
    block.fill_(0).unwrap();
    assert_eq!(t.to_vec().unwrap(), vec![0, 0, 0, 3, 0, 0, 6, 7, 8]);
}

#[test]
fn test_assign_copies_into_view() {
    let t = arange(&[2, 3]);
    let src = Tensor::from_vec(vec![10i64, 20], vec![2], Integers::new()).unwrap();
    let col = t.slice(&[SliceArg::Full, SliceArg::Index(1)]).unwrap();
    col.assign_(&src).unwrap();
    assert_eq!(t.to_vec().unwrap(), vec![0, 10, 2, 3, 20, 5]);
}

#[test]
fn test_assign_overlapping_reverse() {
    let t = arange(&[4]);
    let rev = t.slice(&[SliceArg::reversed()]).unwrap();
    t.assign_(&rev).unwrap();
    assert_eq!(t.to_vec().unwrap(), vec![3, 2, 1, 0]);
}

#[test]
fn test_assign_shape_mismatch() {
    let t = arange(&[2, 2]);
    let other = arange(&[4]);
    assert!(matches!(t.assign_(&other), Err(RingTensorError::ShapeMismatch { .. })));
    assert!(matches!(t.add_(&other), Err(RingTensorError::ShapeMismatch { .. })));
}

#[test]
fn test_add_inplace_modular() {
    let z5 = ModularIntegers::new(5).unwrap();
    let a = Tensor::from_vec(vec![1u64, 2, 3, 4], vec![4], z5).unwrap();
    let b = Tensor::from_vec(vec![4u64, 4, 4, 4], vec![4], z5).unwrap();
    a.add_(&b).unwrap();
    assert_eq!(a.to_vec().unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_add_inplace_self_alias() {
    let t = arange(&[3]);
    t.add_(&t).unwrap();
    assert_eq!(t.to_vec().unwrap(), vec![0, 2, 4]);
}
