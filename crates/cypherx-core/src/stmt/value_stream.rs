use super::*;
use crate::Result;

use std::{collections::VecDeque, fmt, mem};

/// A forward-only stream of result records.
///
/// The stream is pulled by the caller, one record at a time. Records are
/// either buffered up front or produced by an iterator supplied by the query
/// execution layer; an iterator item may be an error, which the consumer
/// propagates.
#[derive(Default)]
pub struct ValueStream {
    buffer: Buffer,
    iter: Option<DynIter>,
}

#[derive(Clone, Default, PartialEq)]
enum Buffer {
    #[default]
    Empty,
    One(ValueRecord),
    Many(VecDeque<ValueRecord>),
}

type DynIter = Box<dyn Iterator<Item = Result<ValueRecord>> + Send + 'static>;

impl ValueStream {
    pub fn from_record(record: impl Into<ValueRecord>) -> Self {
        Self {
            buffer: Buffer::One(record.into()),
            iter: None,
        }
    }

    pub fn from_vec(records: Vec<ValueRecord>) -> Self {
        Self {
            buffer: Buffer::Many(records.into()),
            iter: None,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<T, I>(iter: I) -> Self
    where
        T: Into<ValueRecord>,
        I: Iterator<Item = Result<T>> + Send + 'static,
    {
        Self {
            buffer: Buffer::Empty,
            iter: Some(Box::new(iter.map(|res| res.map(Into::into)))),
        }
    }

    /// Peek at the next record in the stream
    pub fn peek(&mut self) -> Option<Result<&ValueRecord>> {
        if self.buffer.is_empty() {
            match self.iter.as_mut()?.next() {
                Some(Ok(record)) => self.buffer.push(record),
                Some(Err(e)) => return Some(Err(e)),
                None => return None,
            }
        }

        self.buffer.first().map(Ok)
    }

    /// The stream will contain at least this number of records
    pub fn min_len(&self) -> usize {
        let (ret, _) = self.size_hint();
        ret
    }

    pub fn collect(self) -> Result<Vec<ValueRecord>> {
        let mut ret = Vec::with_capacity(self.min_len());

        for res in self {
            ret.push(res?);
        }

        Ok(ret)
    }

    /// Drains the stream into raw rows of values, without any mapping.
    pub fn into_rows(self) -> Result<Vec<Vec<Value>>> {
        let mut ret = Vec::with_capacity(self.min_len());

        for res in self {
            ret.push(res?.into_vec());
        }

        Ok(ret)
    }

    /// Pulls every remaining record from the underlying iterator into the
    /// buffer, stopping at the first error.
    pub fn buffer(&mut self) -> Result<()> {
        if let Some(iter) = self.iter.take() {
            for res in iter {
                self.buffer.push(res?);
            }

            log::trace!("buffered {} records", self.buffer.len());
        }

        Ok(())
    }

    #[cfg(test)]
    fn is_buffered(&self) -> bool {
        self.iter.is_none()
    }
}

impl Iterator for ValueStream {
    type Item = Result<ValueRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(next) = self.buffer.next() {
            Some(Ok(next))
        } else {
            self.iter.as_mut()?.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (mut low, mut high) = match &self.iter {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        };

        let buffered = self.buffer.len();

        low += buffered;

        if let Some(high) = high.as_mut() {
            *high += buffered;
        }

        (low, high)
    }
}

impl From<ValueRecord> for ValueStream {
    fn from(src: ValueRecord) -> Self {
        Self::from_record(src)
    }
}

impl From<Vec<ValueRecord>> for ValueStream {
    fn from(value: Vec<ValueRecord>) -> Self {
        Self::from_vec(value)
    }
}

impl From<Vec<Node>> for ValueStream {
    fn from(nodes: Vec<Node>) -> Self {
        Self::from_vec(nodes.into_iter().map(ValueRecord::from).collect())
    }
}

impl fmt::Debug for ValueStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueStream")
            .field("buffered", &self.buffer.len())
            .field("streaming", &self.iter.is_some())
            .finish()
    }
}

impl Buffer {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    fn first(&self) -> Option<&ValueRecord> {
        match self {
            Self::Empty => None,
            Self::One(record) => Some(record),
            Self::Many(records) => records.front(),
        }
    }

    fn next(&mut self) -> Option<ValueRecord> {
        match self {
            Self::Empty => None,
            Self::One(_) => match mem::take(self) {
                Self::One(record) => Some(record),
                _ => None,
            },
            Self::Many(records) => records.pop_front(),
        }
    }

    fn push(&mut self, record: ValueRecord) {
        match mem::take(self) {
            Self::Empty => *self = Self::One(record),
            Self::One(first) => *self = Self::Many(VecDeque::from([first, record])),
            Self::Many(mut records) => {
                records.push_back(record);
                *self = Self::Many(records);
            }
        }
    }
}
