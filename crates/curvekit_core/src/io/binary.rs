//! Versioned little-endian binary layout for vectors and grids.
//!
//! ```text
//! vector: [version: u8 = 1][len: u32 LE][len × f64 LE]
//! grid:   [version: u8 = 1][rows: u32 LE][cols: u32 LE][rows·cols × f64 LE, row-major]
//! ```

use crate::types::{FormatError, VectorError};
use crate::vector::Vector;
use std::io::{Read, Write};

/// Version byte written in front of every record.
pub const FORMAT_VERSION: u8 = 1;

/// Upper bound on values preallocated from an untrusted length field.
const PREALLOCATE_LIMIT: usize = 1 << 16;

/// Row-major two-dimensional table of doubles backed by a [`Vector`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vector,
}

impl Grid {
    /// Wraps `values` as a `rows × cols` grid.
    ///
    /// # Errors
    ///
    /// [`VectorError::LengthMismatch`] if `values.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, values: Vector) -> Result<Self, VectorError> {
        let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if values.len() != expected {
            return Err(VectorError::LengthMismatch {
                expected,
                got: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.as_slice().get(row * self.cols + col).copied()
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.values.as_slice().get(start..start + self.cols)
    }

    /// All values in row-major order.
    pub fn values(&self) -> &Vector {
        &self.values
    }
}

/// Writes one vector record.
///
/// # Errors
///
/// * [`FormatError::TooLong`] - more than `u32::MAX` values
/// * [`FormatError::Io`] - the writer failed
pub fn write_vector<W: Write>(writer: &mut W, values: &[f64]) -> Result<(), FormatError> {
    let len = length_field(values.len())?;
    writer.write_all(&[FORMAT_VERSION])?;
    writer.write_all(&len.to_le_bytes())?;
    write_values(writer, values)
}

/// Reads one vector record, leaving any following bytes in the reader.
///
/// # Errors
///
/// [`FormatError::CorruptData`] on an unknown version or a truncated record.
pub fn read_vector<R: Read>(reader: &mut R) -> Result<Vector, FormatError> {
    read_version(reader)?;
    let len = read_u32(reader)? as usize;
    Ok(Vector::from(read_values(reader, len)?))
}

/// Encodes a vector into a fresh byte buffer.
///
/// # Example
///
/// ```
/// use curvekit_core::io::{dump, load};
///
/// let bytes = dump(&[1.0, -2.5]).unwrap();
/// assert_eq!(bytes.len(), 1 + 4 + 2 * 8);
/// assert_eq!(load(&bytes).unwrap().as_slice(), &[1.0, -2.5]);
/// ```
pub fn dump(values: &[f64]) -> Result<Vec<u8>, FormatError> {
    let mut bytes = Vec::with_capacity(5 + 8 * values.len());
    write_vector(&mut bytes, values)?;
    Ok(bytes)
}

/// Decodes a byte buffer holding exactly one vector record.
///
/// # Errors
///
/// [`FormatError::CorruptData`] on an unknown version, truncation, or
/// trailing bytes.
pub fn load(bytes: &[u8]) -> Result<Vector, FormatError> {
    let mut cursor = bytes;
    let vector = read_vector(&mut cursor)?;
    ensure_consumed(cursor)?;
    Ok(vector)
}

/// Writes one grid record.
pub fn write_grid<W: Write>(writer: &mut W, grid: &Grid) -> Result<(), FormatError> {
    let rows = length_field(grid.rows)?;
    let cols = length_field(grid.cols)?;
    writer.write_all(&[FORMAT_VERSION])?;
    writer.write_all(&rows.to_le_bytes())?;
    writer.write_all(&cols.to_le_bytes())?;
    write_values(writer, grid.values.as_slice())
}

/// Reads one grid record, leaving any following bytes in the reader.
pub fn read_grid<R: Read>(reader: &mut R) -> Result<Grid, FormatError> {
    read_version(reader)?;
    let rows = read_u32(reader)? as usize;
    let cols = read_u32(reader)? as usize;
    let len = rows
        .checked_mul(cols)
        .ok_or_else(|| FormatError::CorruptData(format!("grid {}x{} overflows", rows, cols)))?;
    let values = Vector::from(read_values(reader, len)?);
    Grid::new(rows, cols, values).map_err(|e| FormatError::CorruptData(e.to_string()))
}

/// Encodes a grid into a fresh byte buffer.
pub fn dump_grid(grid: &Grid) -> Result<Vec<u8>, FormatError> {
    let mut bytes = Vec::with_capacity(9 + 8 * grid.values.len());
    write_grid(&mut bytes, grid)?;
    Ok(bytes)
}

/// Decodes a byte buffer holding exactly one grid record.
pub fn load_grid(bytes: &[u8]) -> Result<Grid, FormatError> {
    let mut cursor = bytes;
    let grid = read_grid(&mut cursor)?;
    ensure_consumed(cursor)?;
    Ok(grid)
}

fn length_field(len: usize) -> Result<u32, FormatError> {
    u32::try_from(len).map_err(|_| FormatError::TooLong(len))
}

fn write_values<W: Write>(writer: &mut W, values: &[f64]) -> Result<(), FormatError> {
    for value in values {
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}

fn read_version<R: Read>(reader: &mut R) -> Result<(), FormatError> {
    let mut version = [0u8; 1];
    reader.read_exact(&mut version)?;
    if version[0] != FORMAT_VERSION {
        return Err(FormatError::CorruptData(format!(
            "unsupported format version {}",
            version[0]
        )));
    }
    Ok(())
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32, FormatError> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

fn read_values<R: Read>(reader: &mut R, len: usize) -> Result<Vec<f64>, FormatError> {
    // The length comes from the stream; grow as values actually arrive.
    let mut values = Vec::with_capacity(len.min(PREALLOCATE_LIMIT));
    let mut bytes = [0u8; 8];
    for _ in 0..len {
        reader.read_exact(&mut bytes)?;
        values.push(f64::from_le_bytes(bytes));
    }
    Ok(values)
}

fn ensure_consumed(rest: &[u8]) -> Result<(), FormatError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(FormatError::CorruptData(format!(
            "{} trailing bytes after record",
            rest.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_corrupt(result: Result<impl std::fmt::Debug, FormatError>) {
        match result {
            Err(FormatError::CorruptData(_)) => {}
            other => panic!("Expected CorruptData, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_layout() {
        let bytes = dump(&[1.0]).unwrap();
        assert_eq!(
            bytes,
            vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xF0, 0x3F]
        );
    }

    #[test]
    fn test_empty_vector() {
        let bytes = dump(&[]).unwrap();
        assert_eq!(bytes, vec![1, 0, 0, 0, 0]);
        assert!(load(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_bit_exact() {
        let values = [
            0.0,
            -0.0,
            1.5e-310,
            f64::MIN_POSITIVE,
            f64::MAX,
            -f64::INFINITY,
            std::f64::consts::PI,
        ];
        let loaded = load(&dump(&values).unwrap()).unwrap();
        for (a, b) in values.iter().zip(loaded.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_every_truncation_is_corrupt() {
        let bytes = dump(&[1.0, 2.0, 3.0]).unwrap();
        for cut in 0..bytes.len() {
            assert_corrupt(load(&bytes[..cut]));
        }
    }

    #[test]
    fn test_trailing_bytes_are_corrupt() {
        let mut bytes = dump(&[1.0]).unwrap();
        bytes.push(0);
        match load(&bytes) {
            Err(FormatError::CorruptData(msg)) => assert!(msg.contains("1 trailing")),
            other => panic!("Expected CorruptData, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_version() {
        let mut bytes = dump(&[1.0]).unwrap();
        bytes[0] = 2;
        match load(&bytes) {
            Err(FormatError::CorruptData(msg)) => assert!(msg.contains("version 2")),
            other => panic!("Expected CorruptData, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_length_field_does_not_preallocate() {
        // Claims u32::MAX values but carries one
        let mut bytes = vec![1, 0xFF, 0xFF, 0xFF, 0xFF];
        bytes.extend_from_slice(&1.0f64.to_le_bytes());
        assert_corrupt(load(&bytes));
    }

    #[test]
    fn test_streaming_records_back_to_back() {
        let mut stream = Vec::new();
        write_vector(&mut stream, &[1.0, 2.0]).unwrap();
        write_vector(&mut stream, &[3.0]).unwrap();

        let mut reader = stream.as_slice();
        assert_eq!(read_vector(&mut reader).unwrap().as_slice(), &[1.0, 2.0]);
        assert_eq!(read_vector(&mut reader).unwrap().as_slice(), &[3.0]);
        assert!(reader.is_empty());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_length_field_limit() {
        let too_long = u32::MAX as usize + 1;
        assert_eq!(length_field(too_long), Err(FormatError::TooLong(too_long)));
        assert_eq!(length_field(7), Ok(7));
    }

    // ========================================
    // Grid
    // ========================================

    fn sample_grid() -> Grid {
        Grid::new(2, 3, Vector::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap()
    }

    #[test]
    fn test_grid_accessors() {
        let grid = sample_grid();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 2), Some(6.0));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_grid_shape_mismatch() {
        let err = Grid::new(2, 2, Vector::from(vec![1.0; 3])).unwrap_err();
        assert_eq!(err, VectorError::LengthMismatch { expected: 4, got: 3 });
    }

    #[test]
    fn test_grid_layout_and_round_trip() {
        let grid = sample_grid();
        let bytes = dump_grid(&grid).unwrap();
        assert_eq!(&bytes[..9], &[1, 2, 0, 0, 0, 3, 0, 0, 0]);
        assert_eq!(bytes.len(), 9 + 6 * 8);
        assert_eq!(load_grid(&bytes).unwrap(), grid);
    }

    #[test]
    fn test_grid_truncated_and_trailing() {
        let bytes = dump_grid(&sample_grid()).unwrap();
        assert_corrupt(load_grid(&bytes[..bytes.len() - 1]));
        let mut longer = bytes.clone();
        longer.extend_from_slice(&[0; 8]);
        assert_corrupt(load_grid(&longer));
    }
}
