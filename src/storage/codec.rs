use ndarray::Array2;

use crate::{AnnErr, Result};

type Dim = u64;
const DIM_SIZE: usize = size_of::<Dim>();
const HEADER_SIZE: usize = 2 * DIM_SIZE;
const VALUE_SIZE: usize = size_of::<f64>();

/// Encodes a matrix as its row and column count followed by its values in row major order,
/// everything little endian.
pub(super) fn encode(m: &Array2<f64>) -> Vec<u8> {
    let (rows, cols) = m.dim();
    let bits: Vec<u64> = m.iter().map(|v| v.to_bits().to_le()).collect();

    let mut buf = Vec::with_capacity(HEADER_SIZE + bits.len() * VALUE_SIZE);
    buf.extend_from_slice(&(rows as Dim).to_le_bytes());
    buf.extend_from_slice(&(cols as Dim).to_le_bytes());
    buf.extend_from_slice(bytemuck::cast_slice::<u64, u8>(&bits));
    buf
}

/// Decodes a matrix written by [`encode`].
///
/// # Errors
/// `AnnErr::Format` if the buffer is shorter than its header or its length disagrees with the
/// dimensions it declares.
pub(super) fn decode(what: &str, buf: &[u8]) -> Result<Array2<f64>> {
    if buf.len() < HEADER_SIZE {
        return Err(AnnErr::Format(format!(
            "{what}: the buffer has {} bytes, must at least be {HEADER_SIZE} bytes",
            buf.len()
        )));
    }

    let (header, data) = buf.split_at(HEADER_SIZE);
    let (rows_buf, cols_buf) = header.split_at(DIM_SIZE);
    let rows = read_dim(rows_buf);
    let cols = read_dim(cols_buf);

    let fits = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(VALUE_SIZE as Dim))
        .is_some_and(|n| n == data.len() as Dim);

    if !fits {
        return Err(AnnErr::Format(format!(
            "{what}: {} bytes of values don't fit a {rows}x{cols} matrix",
            data.len()
        )));
    }

    let values: Vec<f64> = data
        .chunks_exact(VALUE_SIZE)
        .map(|chunk| f64::from_bits(u64::from_le(bytemuck::pod_read_unaligned(chunk))))
        .collect();

    Array2::from_shape_vec((rows as usize, cols as usize), values)
        .map_err(|e| AnnErr::Format(format!("{what}: {e}")))
}

fn read_dim(buf: &[u8]) -> Dim {
    let mut bytes = [0; DIM_SIZE];
    bytes.copy_from_slice(buf);
    Dim::from_le_bytes(bytes)
}
