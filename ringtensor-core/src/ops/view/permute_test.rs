use super::*;
use crate::coefficient::Integers;

fn arange(shape: &[usize]) -> Tensor<Integers<i64>> {
    let numel: usize = shape.iter().product();
    Tensor::from_vec((0..numel as i64).collect(), shape.to_vec(), Integers::new()).unwrap()
}

#[test]
fn test_permute_basic() {
    let t = arange(&[2, 3, 4]);
    let p = t.permute(&[2, 0, 1]).unwrap();
    assert_eq!(p.shape(), vec![4, 2, 3]);
    assert_eq!(p.strides(), vec![1, 12, 4]);
    assert!(p.shares_storage_with(&t));
    // p[k, i, j] == t[i, j, k]
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..4 {
                assert_eq!(p.get(&[k, i, j]).unwrap(), t.get(&[i, j, k]).unwrap());
            }
        }
    }
}

#[test]
fn test_permute_composition() {
    let t = arange(&[2, 3, 4]);
    let p1 = [1, 2, 0];
    let p2 = [2, 0, 1];
    let twice = t.permute(&p1).unwrap().permute(&p2).unwrap();
    // Composite permutation: axis k of the result is axis p1[p2[k]] of t.
    let composed: Vec<usize> = p2.iter().map(|&k| p1[k]).collect();
    let once = t.permute(&composed).unwrap();
    assert_eq!(twice.shape(), once.shape());
    assert_eq!(twice.strides(), once.strides());
    assert_eq!(twice.to_vec().unwrap(), once.to_vec().unwrap());
}

#[test]
fn test_permute_errors() {
    let t = arange(&[2, 3]);
    assert!(matches!(t.permute(&[0]), Err(RingTensorError::RankMismatch { .. })));
    assert!(matches!(t.permute(&[0, 0]), Err(RingTensorError::InvalidPermutation { .. })));
    assert!(matches!(t.permute(&[0, 5]), Err(RingTensorError::InvalidAxis { .. })));
}

#[test]
fn test_transpose() {
    let t = arange(&[2, 3]);
    let tt = t.transpose(0, 1).unwrap();
    assert_eq!(tt.shape(), vec![3, 2]);
    assert_eq!(tt.to_vec().unwrap(), vec![0, 3, 1, 4, 2, 5]);
    assert!(!tt.is_contiguous());
    assert!(matches!(t.transpose(0, 2), Err(RingTensorError::InvalidAxis { .. })));
}
