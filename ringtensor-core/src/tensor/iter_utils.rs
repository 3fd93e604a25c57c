/// Walks the storage slots of a strided view in row-major logical order.
///
/// The multi-index is advanced like an odometer (last axis fastest) and the
/// slot is updated incrementally from the strides, so no per-element
/// multiplication is needed.
#[derive(Debug, Clone)]
pub struct StridedOffsetIter {
    shape: Vec<usize>,
    strides: Vec<isize>,
    index: Vec<usize>,
    current: isize,
    remaining: usize,
}

impl StridedOffsetIter {
    pub fn new(shape: &[usize], strides: &[isize], offset: usize) -> Self {
        StridedOffsetIter {
            shape: shape.to_vec(),
            strides: strides.to_vec(),
            index: vec![0; shape.len()],
            current: offset as isize,
            remaining: shape.iter().product(),
        }
    }
}

impl Iterator for StridedOffsetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.current as usize;
        self.remaining -= 1;
        if self.remaining > 0 {
            for axis in (0..self.shape.len()).rev() {
                self.index[axis] += 1;
                self.current += self.strides[axis];
                if self.index[axis] < self.shape[axis] {
                    break;
                }
                self.current -= self.strides[axis] * self.shape[axis] as isize;
                self.index[axis] = 0;
            }
        }
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StridedOffsetIter {}

/// Enumerates every multi-index of a shape in row-major order.
#[derive(Debug, Clone)]
pub struct NdIndexIter {
    shape: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl NdIndexIter {
    pub fn new(shape: &[usize]) -> Self {
        let empty = shape.iter().any(|&d| d == 0);
        NdIndexIter {
            shape: shape.to_vec(),
            next: if empty { None } else { Some(vec![0; shape.len()]) },
        }
    }
}

impl Iterator for NdIndexIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut following = current.clone();
        for axis in (0..self.shape.len()).rev() {
            following[axis] += 1;
            if following[axis] < self.shape[axis] {
                self.next = Some(following);
                return Some(current);
            }
            following[axis] = 0;
        }
        // Wrapped around every axis (or rank 0): this was the last index.
        Some(current)
    }
}
