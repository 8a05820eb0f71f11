//! Parsing helpers to read binary data from a [Buf].

use bytes::{Buf, Bytes};

use crate::errors::{Error, Result};

pub trait BufParsing: Buf + Sized {
    fn read_u8(&mut self) -> Result<u8> {
        self.ensure_remaining(1)?;
        Ok(self.get_u8())
    }

    fn read_be_u16(&mut self) -> Result<u16> {
        self.ensure_remaining(2)?;
        Ok(self.get_u16())
    }

    fn read_be_u32(&mut self) -> Result<u32> {
        self.ensure_remaining(4)?;
        Ok(self.get_u32())
    }

    fn read_array<const C: usize>(&mut self) -> Result<[u8; C]> {
        self.ensure_remaining(C)?;
        let mut arr = [0u8; C];
        self.copy_to_slice(&mut arr);
        Ok(arr)
    }

    fn read_take(&mut self, size: usize) -> Result<Bytes> {
        self.ensure_remaining(size)?;
        Ok(self.copy_to_bytes(size))
    }

    fn rest(&mut self) -> Bytes {
        let len = self.remaining();
        self.copy_to_bytes(len)
    }

    fn ensure_remaining(&self, size: usize) -> Result<()> {
        if self.remaining() < size {
            return Err(Error::TruncatedInput {
                needed: size,
                remaining: self.remaining(),
            });
        }

        Ok(())
    }
}

impl<B: Buf> BufParsing for B {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_exhausted() {
        let mut buf = &[0x01, 0x02][..];
        assert_eq!(buf.read_u8().unwrap(), 0x01);
        let err = buf.read_be_u32().unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedInput {
                needed: 4,
                remaining: 1
            }
        ));
        // the failed read must not consume anything
        assert_eq!(buf.read_u8().unwrap(), 0x02);
    }

    #[test]
    fn test_read_take() {
        let mut buf = &b"hello world"[..];
        assert_eq!(buf.read_take(5).unwrap(), Bytes::from_static(b"hello"));
        assert_eq!(buf.rest(), Bytes::from_static(b" world"));
    }
}
