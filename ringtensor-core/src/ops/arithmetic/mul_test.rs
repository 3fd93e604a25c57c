use super::*;
use crate::coefficient::{Integers, ModularIntegers, Reals};
use approx::assert_relative_eq;

#[test]
fn test_mul_elementwise() {
    let z = Integers::<i64>::new();
    let a = Tensor::from_vec(vec![1, 2, 3, 4], vec![2, 2], z).unwrap();
    let b = Tensor::from_vec(vec![2, 0, -1, 3], vec![2, 2], z).unwrap();
    assert_eq!(mul_op(&a, &b).unwrap().to_vec().unwrap(), vec![2, 0, -3, 12]);
}

#[test]
fn test_scale() {
    let z5 = ModularIntegers::new(5).unwrap();
    let a = Tensor::from_vec(vec![1u64, 2, 3, 4], vec![4], z5).unwrap();
    assert_eq!(scale_op(&a, &3).unwrap().to_vec().unwrap(), vec![3, 1, 4, 2]);

    let r = Tensor::from_vec(vec![0.5f64, -1.5], vec![2], Reals::new()).unwrap();
    let scaled = scale_op(&r, &0.1).unwrap().to_vec().unwrap();
    assert_relative_eq!(scaled[0], 0.05, epsilon = 1e-12);
    assert_relative_eq!(scaled[1], -0.15, epsilon = 1e-12);
}

#[test]
fn test_mul_shape_mismatch() {
    let z = Integers::<i64>::new();
    let a = Tensor::from_vec(vec![1, 2], vec![2], z).unwrap();
    let b = Tensor::from_vec(vec![1, 2, 3, 4], vec![2, 2], z).unwrap();
    assert!(matches!(mul_op(&a, &b), Err(RingTensorError::ShapeMismatch { .. })));
}
