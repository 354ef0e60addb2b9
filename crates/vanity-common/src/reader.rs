//! Column reader for packed sheet rows.
//!
//! Game sheets store each row as a fixed-width byte block where every column
//! lives at a known offset. [`SheetReader`] reads those columns either
//! sequentially (cursor style) or at an absolute offset, without copying.

use byteorder::{ByteOrder, LittleEndian};
use zerocopy::FromBytes;

use crate::{Error, Result};

/// Cursor over one packed sheet row, or a run of fixed-size records.
///
/// # Example
///
/// ```
/// use vanity_common::SheetReader;
///
/// let row = [0x05, 0x00, 0x00, 0x00, 0x2A, 0x00, 0x00, 0x00];
/// let mut reader = SheetReader::new(&row);
///
/// assert_eq!(reader.read_u32().unwrap(), 5);
/// assert_eq!(reader.u32_at(4).unwrap(), 42);
/// assert_eq!(reader.position(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SheetReader<'a> {
    row: &'a [u8],
    position: usize,
}

impl<'a> SheetReader<'a> {
    #[inline]
    pub const fn new(row: &'a [u8]) -> Self {
        Self { row, position: 0 }
    }

    /// Cursor offset into the row.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// True once the cursor has passed the last column.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.row.len()
    }

    /// Column bytes at `offset`. Does not move the cursor.
    #[inline]
    pub fn bytes_at(&self, offset: usize, count: usize) -> Result<&'a [u8]> {
        let available = self.row.len().saturating_sub(offset);
        if available < count {
            return Err(Error::UnexpectedEof { needed: count, available });
        }
        Ok(&self.row[offset..offset + count])
    }

    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let column = self.bytes_at(self.position, count)?;
        self.position += count;
        Ok(column)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_bytes(1).map(|b| b[0])
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_bytes(4).map(LittleEndian::read_u32)
    }

    /// A u32 column at `offset`, cursor untouched.
    #[inline]
    pub fn u32_at(&self, offset: usize) -> Result<u32> {
        self.bytes_at(offset, 4).map(LittleEndian::read_u32)
    }

    /// `count` consecutive u32 columns.
    pub fn read_u32_array(&mut self, count: usize) -> Result<Vec<u32>> {
        let column = self.read_bytes(count * 4)?;
        let mut values = vec![0u32; count];
        LittleEndian::read_u32_into(column, &mut values);
        Ok(values)
    }

    /// Read one packed record and advance past it.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let column = self.read_bytes(size)?;
        T::read_from_bytes(column).map_err(|_| Error::UnexpectedEof {
            needed: size,
            available: column.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_reads_keep_cursor() {
        // Face count column at 0, first face icon at 4.
        let row = [4u8, 0, 0, 0, 0x4D, 0x04, 0, 0];
        let reader = SheetReader::new(&row);

        assert_eq!(reader.u32_at(4).unwrap(), 1101);
        assert_eq!(reader.u32_at(0).unwrap(), 4);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_param_columns() {
        let row = [101u8, 0, 0, 0, 102, 0, 0, 0, 103, 0, 0, 0];
        let mut reader = SheetReader::new(&row);

        assert_eq!(reader.read_u32_array(3).unwrap(), vec![101, 102, 103]);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_truncated_row() {
        let row = [7u8, 1, 0];
        let mut reader = SheetReader::new(&row);

        assert_eq!(reader.read_u8().unwrap(), 7);
        assert!(reader.read_u32().is_err());
        assert!(matches!(
            reader.u32_at(2),
            Err(Error::UnexpectedEof { needed: 4, available: 1 })
        ));
    }
}
