use crate::coefficient::Ring;
use crate::error::RingTensorError;
use crate::tensor::Tensor;

/// Canonical, string-free description of an index contraction.
///
/// Every axis of every input carries an integer label id. Labels listed in
/// `output` are free (one output axis each, in that order); every other label
/// that occurs on an input is summed over. A label repeated on one input
/// selects that input's diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionSpec {
    inputs: Vec<Vec<usize>>,
    output: Vec<usize>,
    sizes: Vec<usize>,
}

fn malformed(msg: impl Into<String>) -> RingTensorError {
    RingTensorError::MalformedContractionSpec(msg.into())
}

impl ContractionSpec {
    /// Builds a spec from per-input label arrays, the output label array and
    /// the size bound to each label id.
    ///
    /// # Errors
    /// `MalformedContractionSpec` when there are no inputs, an input has no
    /// labels, a label id has no size, or an output label is repeated or does
    /// not occur on any input.
    pub fn new(
        inputs: Vec<Vec<usize>>,
        output: Vec<usize>,
        sizes: Vec<usize>,
    ) -> Result<Self, RingTensorError> {
        if inputs.is_empty() {
            return Err(malformed("contraction needs at least one input"));
        }
        for (k, labels) in inputs.iter().enumerate() {
            if labels.is_empty() {
                return Err(malformed(format!("input {} has no labels", k)));
            }
            if let Some(&bad) = labels.iter().find(|&&l| l >= sizes.len()) {
                return Err(malformed(format!(
                    "label {} on input {} has no size (only {} labels known)",
                    bad,
                    k,
                    sizes.len()
                )));
            }
        }
        let mut seen = vec![false; sizes.len()];
        for &label in &output {
            if label >= sizes.len() {
                return Err(malformed(format!("output label {} has no size", label)));
            }
            if seen[label] {
                return Err(malformed(format!("output label {} repeated", label)));
            }
            seen[label] = true;
            if !inputs.iter().any(|labels| labels.contains(&label)) {
                return Err(malformed(format!(
                    "output label {} does not occur on any input",
                    label
                )));
            }
        }
        Ok(ContractionSpec {
            inputs,
            output,
            sizes,
        })
    }

    /// Like [`ContractionSpec::new`] but reads label sizes off the tensors.
    ///
    /// # Errors
    /// `MalformedContractionSpec` when the number of label arrays or any
    /// array's length disagrees with the tensors, or a label id is not smaller
    /// than the total number of labels written; `LabelSizeConflict` when one
    /// label meets two different axis sizes.
    pub fn from_tensors<R: Ring>(
        tensors: &[&Tensor<R>],
        inputs: &[Vec<usize>],
        output: &[usize],
    ) -> Result<Self, RingTensorError> {
        if tensors.len() != inputs.len() {
            return Err(malformed(format!(
                "{} label arrays for {} tensors",
                inputs.len(),
                tensors.len()
            )));
        }
        // Ids are expected to be dense: none may exceed the number of label
        // slots, which also bounds the size table allocated below.
        let slots = inputs.iter().map(Vec::len).sum::<usize>() + output.len();
        let mut label_count = 0;
        for &label in inputs.iter().flatten().chain(output.iter()) {
            if label >= slots {
                return Err(malformed(format!(
                    "label id {} out of range for {} label slots",
                    label, slots
                )));
            }
            label_count = label_count.max(label + 1);
        }
        let mut sizes: Vec<Option<usize>> = vec![None; label_count];
        for (k, (tensor, labels)) in tensors.iter().zip(inputs.iter()).enumerate() {
            let shape = tensor.shape();
            if shape.len() != labels.len() {
                return Err(malformed(format!(
                    "input {} has rank {} but {} labels",
                    k,
                    shape.len(),
                    labels.len()
                )));
            }
            for (&label, &dim) in labels.iter().zip(shape.iter()) {
                match sizes[label] {
                    Some(first) if first != dim => {
                        return Err(RingTensorError::LabelSizeConflict {
                            label: label.to_string(),
                            first,
                            second: dim,
                        });
                    }
                    Some(_) => {}
                    None => sizes[label] = Some(dim),
                }
            }
        }
        // Ids that never occur on an input are never iterated; any size will do.
        let sizes = sizes.into_iter().map(|s| s.unwrap_or(1)).collect();
        ContractionSpec::new(inputs.to_vec(), output.to_vec(), sizes)
    }

    pub fn inputs(&self) -> &[Vec<usize>] {
        &self.inputs
    }

    pub fn output(&self) -> &[usize] {
        &self.output
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of label ids that have a bound size.
    pub fn label_count(&self) -> usize {
        self.sizes.len()
    }

    /// For each label id, the output axis it maps to (`None` if summed over
    /// or unused).
    pub fn output_positions(&self) -> Vec<Option<usize>> {
        let mut positions = vec![None; self.sizes.len()];
        for (axis, &label) in self.output.iter().enumerate() {
            positions[label] = Some(axis);
        }
        positions
    }

    /// Labels occurring on some input but not in the output, ascending.
    pub fn contracted_labels(&self) -> Vec<usize> {
        let positions = self.output_positions();
        (0..self.sizes.len())
            .filter(|&l| positions[l].is_none())
            .filter(|l| self.inputs.iter().any(|labels| labels.contains(l)))
            .collect()
    }

    pub fn output_shape(&self) -> Vec<usize> {
        self.output.iter().map(|&l| self.sizes[l]).collect()
    }
}
