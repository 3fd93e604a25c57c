use crate::error::RingTensorError;

/// A nested sequence of elements, the literal form of a tensor.
///
/// `Leaf` is a single element (rank 0); `Node` is a list whose children must
/// all have the same shape.
#[derive(Debug, Clone, PartialEq)]
pub enum NestedSeq<E> {
    Leaf(E),
    Node(Vec<NestedSeq<E>>),
}

impl<E: Clone> NestedSeq<E> {
    pub fn leaf(value: E) -> Self {
        NestedSeq::Leaf(value)
    }

    pub fn node(children: Vec<NestedSeq<E>>) -> Self {
        NestedSeq::Node(children)
    }

    /// A one-dimensional sequence.
    pub fn from_vec(values: Vec<E>) -> Self {
        NestedSeq::Node(values.into_iter().map(NestedSeq::Leaf).collect())
    }

    /// A two-dimensional sequence given row by row.
    pub fn from_rows(rows: Vec<Vec<E>>) -> Self {
        NestedSeq::Node(rows.into_iter().map(NestedSeq::from_vec).collect())
    }

    /// Infers the shape from the first branch at every depth, then flattens in
    /// row-major order while checking that every branch agrees.
    ///
    /// # Errors
    /// `InvalidShape` for ragged nesting or an empty list at any depth.
    pub fn flatten(&self) -> Result<(Vec<usize>, Vec<E>), RingTensorError> {
        let mut shape = Vec::new();
        let mut cursor = self;
        while let NestedSeq::Node(children) = cursor {
            shape.push(children.len());
            match children.first() {
                Some(first) => cursor = first,
                None => break,
            }
        }
        if shape.iter().any(|&d| d == 0) {
            return Err(RingTensorError::InvalidShape {
                shape,
                reason: "nested sequence contains an empty list".to_string(),
            });
        }
        let mut values = Vec::with_capacity(shape.iter().product());
        self.collect_into(&shape, 0, &mut values)?;
        Ok((shape, values))
    }

    fn collect_into(&self, shape: &[usize], depth: usize, out: &mut Vec<E>) -> Result<(), RingTensorError> {
        match self {
            NestedSeq::Leaf(value) if depth == shape.len() => {
                out.push(value.clone());
                Ok(())
            }
            NestedSeq::Node(children) if depth < shape.len() && children.len() == shape[depth] => {
                for child in children {
                    child.collect_into(shape, depth + 1, out)?;
                }
                Ok(())
            }
            _ => Err(RingTensorError::InvalidShape {
                shape: shape.to_vec(),
                reason: format!("ragged nested sequence at depth {}", depth),
            }),
        }
    }
}
