use super::*;
use crate::coefficient::{Integers, ModularIntegers};

#[test]
fn test_add_tensors_ok() {
    let z = Integers::<i64>::new();
    let t1 = Tensor::from_vec(vec![1, 2, 3, 4], vec![2, 2], z).unwrap();
    let t2 = Tensor::from_vec(vec![5, 6, 7, 8], vec![2, 2], z).unwrap();
    let result = add_op(&t1, &t2).unwrap();
    assert_eq!(result.to_vec().unwrap(), vec![6, 8, 10, 12]);
    assert_eq!(result.shape(), vec![2, 2]);
    assert!(!result.shares_storage_with(&t1));
}

#[test]
fn test_add_uses_ring_arithmetic() {
    let z3 = ModularIntegers::new(3).unwrap();
    let t1 = Tensor::from_vec(vec![1u64, 2], vec![2], z3).unwrap();
    let t2 = Tensor::from_vec(vec![2u64, 2], vec![2], z3).unwrap();
    assert_eq!(add_op(&t1, &t2).unwrap().to_vec().unwrap(), vec![0, 1]);
}

#[test]
fn test_add_non_contiguous_operands() {
    let z = Integers::<i64>::new();
    let m = Tensor::from_vec((0..6).collect(), vec![2, 3], z).unwrap();
    let mt = m.transpose(0, 1).unwrap();
    let ones = crate::tensor::ones(&[3, 2], z).unwrap();
    assert_eq!(add_op(&mt, &ones).unwrap().to_vec().unwrap(), vec![1, 4, 2, 5, 3, 6]);
}

#[test]
fn test_add_tensors_shape_mismatch() {
    let z = Integers::<i64>::new();
    let t1 = Tensor::from_vec(vec![1, 2], vec![2], z).unwrap();
    let t2 = Tensor::from_vec(vec![1, 2, 3], vec![3], z).unwrap();
    let result = add_op(&t1, &t2);
    assert_eq!(
        result.unwrap_err(),
        RingTensorError::ShapeMismatch {
            expected: vec![2],
            actual: vec![3],
            operation: "add".to_string()
        }
    );
}
