use std::sync::{Arc, RwLockReadGuard};

use log::debug;

use crate::coefficient::Ring;
use crate::einsum::contraction::ContractionSpec;
use crate::error::RingTensorError;
use crate::tensor::iter_utils::NdIndexIter;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// How one input addresses its storage as a function of label values.
///
/// Repeated labels on the input have their strides added together, which is
/// what makes `"ii"` walk the diagonal.
struct InputAddressing {
    offset: isize,
    free_strides: Vec<isize>,
    contracted_strides: Vec<isize>,
}

impl InputAddressing {
    fn new<R: Ring>(td: &TensorData<R>, labels: &[usize], free: &[usize], contracted: &[usize]) -> Self {
        let stride_of = |label: usize| -> isize {
            labels
                .iter()
                .zip(td.strides.iter())
                .filter(|(&l, _)| l == label)
                .map(|(_, &s)| s)
                .sum()
        };
        InputAddressing {
            offset: td.offset as isize,
            free_strides: free.iter().map(|&l| stride_of(l)).collect(),
            contracted_strides: contracted.iter().map(|&l| stride_of(l)).collect(),
        }
    }
}

fn dot(index: &[usize], strides: &[isize]) -> isize {
    index.iter().zip(strides.iter()).map(|(&i, &s)| i as isize * s).sum()
}

fn validate<R: Ring>(tensors: &[&Tensor<R>], spec: &ContractionSpec) -> Result<(), RingTensorError> {
    if tensors.is_empty() {
        return Err(RingTensorError::MalformedContractionSpec(
            "contraction needs at least one input".to_string(),
        ));
    }
    if tensors.len() != spec.inputs().len() {
        return Err(RingTensorError::MalformedContractionSpec(format!(
            "spec describes {} inputs but {} tensors were given",
            spec.inputs().len(),
            tensors.len()
        )));
    }
    for (k, (tensor, labels)) in tensors.iter().zip(spec.inputs().iter()).enumerate() {
        let shape = &tensor.read_data().shape;
        if shape.len() != labels.len() {
            return Err(RingTensorError::MalformedContractionSpec(format!(
                "input {} has rank {} but {} labels",
                k,
                shape.len(),
                labels.len()
            )));
        }
        for (&label, &dim) in labels.iter().zip(shape.iter()) {
            let bound = spec.sizes()[label];
            if bound != dim {
                return Err(RingTensorError::LabelSizeConflict {
                    label: label.to_string(),
                    first: bound,
                    second: dim,
                });
            }
        }
    }
    Ok(())
}

/// Executes a contraction.
///
/// For every assignment of the free labels (in output-axis order) the engine
/// sums, over every assignment of the contracted labels, the product of the
/// addressed input elements. Products start from the model's `one` and sums
/// from its `zero`, so a zero-sized contracted label yields zeros and a spec
/// without contracted labels is a pure product. Arithmetic uses the first
/// input's coefficient model. Inputs are only read; the result owns fresh
/// storage.
///
/// # Errors
/// `MalformedContractionSpec` if the tensor count or a rank disagrees with the
/// spec, `LabelSizeConflict` if an axis size disagrees with its label's size,
/// `LockError` if a storage lock is poisoned.
pub fn contract<R: Ring>(
    tensors: &[&Tensor<R>],
    spec: &ContractionSpec,
) -> Result<Tensor<R>, RingTensorError> {
    validate(tensors, spec)?;

    let ring = tensors[0].read_data().ring.clone();
    let free: Vec<usize> = spec.output().to_vec();
    let contracted = spec.contracted_labels();
    let free_shape = spec.output_shape();
    let contracted_shape: Vec<usize> = contracted.iter().map(|&l| spec.sizes()[l]).collect();

    let addressing: Vec<InputAddressing> = tensors
        .iter()
        .zip(spec.inputs().iter())
        .map(|(t, labels)| InputAddressing::new(t.read_data(), labels, &free, &contracted))
        .collect();

    // One read guard per distinct buffer: two views of the same storage must
    // not take the same read lock twice.
    let mut guards: Vec<RwLockReadGuard<'_, Vec<R::Element>>> = Vec::new();
    let mut guard_of: Vec<usize> = Vec::with_capacity(tensors.len());
    for (k, tensor) in tensors.iter().enumerate() {
        let buffer = tensor.read_data().buffer();
        let shared = tensors[..k]
            .iter()
            .position(|earlier| Arc::ptr_eq(earlier.read_data().buffer(), buffer));
        match shared {
            Some(j) => guard_of.push(guard_of[j]),
            None => {
                guard_of.push(guards.len());
                guards.push(buffer.read()?);
            }
        }
    }

    let terms: usize = contracted_shape.iter().product();
    debug!(
        "contract: {} inputs, {} free labels {:?}, {} contracted labels {:?}, {} terms per output element",
        tensors.len(),
        free.len(),
        free_shape,
        contracted.len(),
        contracted_shape,
        terms
    );

    let numel: usize = free_shape.iter().product();
    let mut values = Vec::with_capacity(numel);
    let mut bases = vec![0isize; tensors.len()];
    for free_index in NdIndexIter::new(&free_shape) {
        for (base, addr) in bases.iter_mut().zip(addressing.iter()) {
            *base = addr.offset + dot(&free_index, &addr.free_strides);
        }
        let mut acc = ring.zero();
        for contracted_index in NdIndexIter::new(&contracted_shape) {
            let mut product = ring.one();
            for (k, addr) in addressing.iter().enumerate() {
                let slot = (bases[k] + dot(&contracted_index, &addr.contracted_strides)) as usize;
                product = ring.mul(&product, &guards[guard_of[k]][slot]);
            }
            acc = ring.add(&acc, &product);
        }
        values.push(acc);
    }
    drop(guards);

    Ok(Tensor::from_data(TensorData::new(values, free_shape, ring)?))
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
