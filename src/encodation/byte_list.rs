//! Bounded, append/remove-last mutable byte buffer.
//!
//! Every codeword the encoding core ever writes goes through here first.
//! Appending past capacity is a contract violation, not a place to
//! truncate silently.
use super::{EncodeError, FatalReason};

#[derive(Debug, Clone)]
pub(crate) struct ByteList {
    bytes: Vec<u8>,
    capacity: usize,
}

impl ByteList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, byte: u8) -> Result<(), EncodeError> {
        if self.bytes.len() >= self.capacity {
            return Err(EncodeError::Fatal(FatalReason::BufferFull));
        }
        self.bytes.push(byte);
        Ok(())
    }

    pub(crate) fn insert_at(&mut self, index: usize, byte: u8) -> Result<(), EncodeError> {
        if self.bytes.len() >= self.capacity {
            return Err(EncodeError::Fatal(FatalReason::BufferFull));
        }
        self.bytes.insert(index, byte);
        Ok(())
    }

    pub(crate) fn remove_last(&mut self) -> Option<u8> {
        self.bytes.pop()
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> u8 {
        self.bytes.remove(index)
    }

    pub(crate) fn set_at(&mut self, index: usize, byte: u8) {
        self.bytes[index] = byte;
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

#[test]
fn test_overflow_is_fatal() {
    let mut list = ByteList::with_capacity(2);
    list.push(1).unwrap();
    list.push(2).unwrap();
    assert_eq!(
        list.push(3),
        Err(EncodeError::Fatal(FatalReason::BufferFull))
    );
}

#[test]
fn test_remove_last() {
    let mut list = ByteList::with_capacity(4);
    list.push(7).unwrap();
    list.push(8).unwrap();
    assert_eq!(list.remove_last(), Some(8));
    assert_eq!(list.as_slice(), &[7]);
}
