use rand::rngs::StdRng;
use rand::SeedableRng;
use ringtensor_core::coefficient::Integers;
use ringtensor_core::tensor::Tensor;

pub type Z = Integers<i64>;

// Shared across several test crates; not every one uses every helper.
#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<i64>, shape: Vec<usize>) -> Tensor<Z> {
    Tensor::from_vec(data, shape, Integers::new()).expect("Test tensor creation failed")
}

/// `rows x cols` tensor holding `0..rows*cols` in row-major order.
#[allow(dead_code)]
pub fn arange_matrix(rows: usize, cols: usize) -> Tensor<Z> {
    create_test_tensor((0..(rows * cols) as i64).collect(), vec![rows, cols])
}

#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
