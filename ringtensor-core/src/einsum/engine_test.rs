use super::*;
use crate::coefficient::{Integers, ModularIntegers};
use crate::ops::view::SliceArg;

fn z() -> Integers<i64> {
    Integers::new()
}

fn grid(rows: usize, cols: usize) -> Tensor<Integers<i64>> {
    Tensor::from_fn(&[rows, cols], z(), |idx| (idx[0] * cols + idx[1]) as i64).unwrap()
}

#[test]
fn test_contract_matmul() {
    let a = grid(2, 3);
    let b = grid(3, 2);
    let spec = ContractionSpec::new(vec![vec![0, 1], vec![1, 2]], vec![0, 2], vec![2, 3, 2]).unwrap();
    let c = contract(&[&a, &b], &spec).unwrap();
    assert_eq!(c.shape(), vec![2, 2]);
    // [[0,1,2],[3,4,5]] x [[0,1],[2,3],[4,5]]
    assert_eq!(c.to_vec().unwrap(), vec![10, 13, 28, 40]);
}

#[test]
fn test_contract_repeated_label_reads_diagonal() {
    let m = grid(3, 3);
    let diag = ContractionSpec::new(vec![vec![0, 0]], vec![0], vec![3]).unwrap();
    assert_eq!(contract(&[&m], &diag).unwrap().to_vec().unwrap(), vec![0, 4, 8]);
    let trace = ContractionSpec::new(vec![vec![0, 0]], vec![], vec![3]).unwrap();
    let t = contract(&[&m], &trace).unwrap();
    assert_eq!(t.rank(), 0);
    assert_eq!(t.item().unwrap(), 12);
}

#[test]
fn test_contract_pure_product_and_outer() {
    let u = Tensor::from_vec(vec![1, 2], vec![2], z()).unwrap();
    let v = Tensor::from_vec(vec![3, 4, 5], vec![3], z()).unwrap();
    let spec = ContractionSpec::new(vec![vec![0], vec![1]], vec![0, 1], vec![2, 3]).unwrap();
    let outer = contract(&[&u, &v], &spec).unwrap();
    assert_eq!(outer.to_vec().unwrap(), vec![3, 4, 5, 6, 8, 10]);
}

#[test]
fn test_contract_zero_sized_contracted_label_gives_zero() {
    let m = grid(2, 3);
    let empty = m.slice(&[SliceArg::Full, SliceArg::range(1, 1)]).unwrap();
    assert_eq!(empty.shape(), vec![2, 0]);
    let spec = ContractionSpec::new(vec![vec![0, 1]], vec![0], vec![2, 0]).unwrap();
    let s = contract(&[&empty], &spec).unwrap();
    assert_eq!(s.to_vec().unwrap(), vec![0, 0]);
}

#[test]
fn test_contract_through_strided_views() {
    let m = grid(3, 3);
    let t = m.transpose(0, 1).unwrap();
    let rev = m.slice(&[SliceArg::reversed()]).unwrap();
    let spec = ContractionSpec::new(vec![vec![0, 1], vec![0, 1]], vec![0, 1], vec![3, 3]).unwrap();
    let prod = contract(&[&t, &rev], &spec).unwrap();
    let expected: Vec<i64> = (0..9)
        .map(|k| {
            let (i, j) = (k / 3, k % 3);
            ((j * 3 + i) * ((2 - i) * 3 + j)) as i64
        })
        .collect();
    assert_eq!(prod.to_vec().unwrap(), expected);
}

#[test]
fn test_contract_aliasing_inputs_share_one_lock() {
    let m = grid(2, 2);
    let view = m.transpose(0, 1).unwrap();
    let spec = ContractionSpec::new(vec![vec![0, 1], vec![1, 2]], vec![0, 2], vec![2, 2, 2]).unwrap();
    let c = contract(&[&m, &view], &spec).unwrap();
    // M . M^T for M = [[0,1],[2,3]]
    assert_eq!(c.to_vec().unwrap(), vec![1, 3, 3, 13]);
    assert_eq!(m.to_vec().unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_contract_uses_model_arithmetic() {
    let z5 = ModularIntegers::new(5).unwrap();
    let a = Tensor::from_vec(vec![2u64, 3, 4], vec![3], z5).unwrap();
    let spec = ContractionSpec::new(vec![vec![0], vec![0]], vec![], vec![3]).unwrap();
    // 4 + 9 + 16 = 29 = 4 mod 5
    assert_eq!(contract(&[&a, &a], &spec).unwrap().item().unwrap(), 4);
}

#[test]
fn test_contract_validation() {
    let m = grid(2, 3);
    let spec = ContractionSpec::new(vec![vec![0, 1]], vec![0], vec![2, 4]).unwrap();
    assert_eq!(
        contract(&[&m], &spec).unwrap_err(),
        RingTensorError::LabelSizeConflict {
            label: "1".to_string(),
            first: 4,
            second: 3
        }
    );
    let rank = ContractionSpec::new(vec![vec![0]], vec![0], vec![2]).unwrap();
    assert!(matches!(
        contract(&[&m], &rank),
        Err(RingTensorError::MalformedContractionSpec(_))
    ));
    let two = ContractionSpec::new(vec![vec![0, 1], vec![0, 1]], vec![], vec![2, 3]).unwrap();
    assert!(matches!(
        contract(&[&m], &two),
        Err(RingTensorError::MalformedContractionSpec(_))
    ));
    let none: Vec<&Tensor<Integers<i64>>> = Vec::new();
    assert!(matches!(
        contract(&none, &spec),
        Err(RingTensorError::MalformedContractionSpec(_))
    ));
}
