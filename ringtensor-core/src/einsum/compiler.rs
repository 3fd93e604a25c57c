use log::debug;

use crate::einsum::contraction::ContractionSpec;
use crate::error::RingTensorError;

fn malformed(expr: &str, msg: impl AsRef<str>) -> RingTensorError {
    RingTensorError::MalformedContractionSpec(format!("'{}': {}", expr, msg.as_ref()))
}

/// Compiles an index-label expression such as `"ij,jk->ik"` against the
/// shapes of its operands.
///
/// Labels are single ASCII letters and whitespace is ignored. Label ids are
/// handed out in order of first appearance. Without `->`, the output consists
/// of the labels that occur exactly once across all inputs, in order of first
/// appearance; `"...->"` with nothing on the right produces a rank-0 result.
///
/// # Errors
/// - `MalformedContractionSpec` for unknown characters, more than one `->`, a
///   repeated or orphan output label, a term count different from the number
///   of shapes, or a term whose length differs from its operand's rank.
/// - `LabelSizeConflict` when one label is bound to two different sizes.
pub fn compile(expr: &str, shapes: &[&[usize]]) -> Result<ContractionSpec, RingTensorError> {
    let cleaned: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
    let sides: Vec<&str> = cleaned.split("->").collect();
    if sides.len() > 2 {
        return Err(malformed(expr, "more than one '->'"));
    }
    let lhs = sides[0];
    let rhs = sides.get(1).copied();

    if let Some(bad) = lhs.chars().find(|&c| !(c.is_ascii_alphabetic() || c == ',')) {
        return Err(malformed(expr, format!("unexpected character '{}'", bad)));
    }
    if let Some(bad) = rhs.and_then(|r| r.chars().find(|c| !c.is_ascii_alphabetic())) {
        return Err(malformed(expr, format!("unexpected character '{}' in output", bad)));
    }

    let terms: Vec<&str> = lhs.split(',').collect();
    if terms.len() != shapes.len() {
        return Err(malformed(
            expr,
            format!("{} input terms for {} operands", terms.len(), shapes.len()),
        ));
    }

    let mut names: Vec<char> = Vec::new();
    let mut sizes: Vec<usize> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    let mut inputs: Vec<Vec<usize>> = Vec::with_capacity(terms.len());
    for (k, (term, shape)) in terms.iter().zip(shapes.iter()).enumerate() {
        if term.len() != shape.len() {
            return Err(malformed(
                expr,
                format!("term {} '{}' has {} labels but operand {} has rank {}", k, term, term.len(), k, shape.len()),
            ));
        }
        let mut labels = Vec::with_capacity(term.len());
        for (c, &dim) in term.chars().zip(shape.iter()) {
            let id = match names.iter().position(|&n| n == c) {
                Some(id) => {
                    if sizes[id] != dim {
                        return Err(RingTensorError::LabelSizeConflict {
                            label: c.to_string(),
                            first: sizes[id],
                            second: dim,
                        });
                    }
                    id
                }
                None => {
                    names.push(c);
                    sizes.push(dim);
                    counts.push(0);
                    names.len() - 1
                }
            };
            counts[id] += 1;
            labels.push(id);
        }
        inputs.push(labels);
    }

    let output: Vec<usize> = match rhs {
        Some(out) => {
            let mut output = Vec::with_capacity(out.len());
            for c in out.chars() {
                let id = names
                    .iter()
                    .position(|&n| n == c)
                    .ok_or_else(|| malformed(expr, format!("output label '{}' not on any input", c)))?;
                if output.contains(&id) {
                    return Err(malformed(expr, format!("output label '{}' repeated", c)));
                }
                output.push(id);
            }
            output
        }
        None => (0..names.len()).filter(|&id| counts[id] == 1).collect(),
    };

    let spec = ContractionSpec::new(inputs, output, sizes)?;
    debug!(
        "compiled '{}' -> labels {:?}, inputs {:?}, output {:?}, sizes {:?}",
        expr,
        names,
        spec.inputs(),
        spec.output(),
        spec.sizes()
    );
    Ok(spec)
}

#[cfg(test)]
#[path = "compiler_test.rs"]
mod tests;
