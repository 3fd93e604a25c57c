use crate::coefficient::Ring;
use crate::tensor::Tensor;

/// Checks that `actual` has `expected_shape` and that every element is equal,
/// under the tensor's own coefficient model, to the row-major `expected`
/// values.
///
/// Panics with the first mismatching position otherwise.
pub fn check_tensor_elements<R: Ring>(actual: &Tensor<R>, expected_shape: &[usize], expected: &[R::Element]) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");

    let actual_data = actual
        .to_vec()
        .expect("Failed to read tensor data in check_tensor_elements");
    assert_eq!(actual_data.len(), expected.len(), "Data length mismatch");

    let ring = actual.ring();
    for (i, (a, e)) in actual_data.iter().zip(expected.iter()).enumerate() {
        if !ring.is_equal(a, e) {
            panic!("Data mismatch at index {}: actual={:?}, expected={:?}", i, a, e);
        }
    }
}
