use super::MAX_LINE_LEN;
use crate::error;
use crate::lang::{Error, Line};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;

/// ## Program store
///
/// Numbered lines kept in ascending order, one per line number.
/// Clones share storage until one of them is edited.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<BTreeMap<u16, Line>>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Replaces any line with the same number. Direct lines are refused.
    pub fn insert(&mut self, line: Line) -> Result<Option<Line>, Error> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(InternalError; "LINE HAS NO NUMBER")),
        };
        Ok(Arc::make_mut(&mut self.source).insert(number, line))
    }

    pub fn remove(&mut self, number: u16) -> Option<Line> {
        if !self.source.contains_key(&number) {
            return None;
        }
        Arc::make_mut(&mut self.source).remove(&number)
    }

    pub fn line(&self, number: u16) -> Option<&Line> {
        self.source.get(&number)
    }

    pub fn first(&self) -> Option<u16> {
        self.source.keys().next().copied()
    }

    /// Smallest stored line number strictly greater than `number`.
    pub fn next_after(&self, number: u16) -> Option<u16> {
        self.source
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(n, _)| *n)
    }

    pub fn lines(&self) -> Values<'_, u16, Line> {
        self.source.values()
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        if line.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        let line = Line::new(line)?;
        match line.number() {
            Some(number) if line.is_empty() => {
                self.remove(number);
                Ok(())
            }
            Some(_) => self.insert(line).map(|_| ()),
            None if line.is_empty() => Ok(()),
            None => Err(error!(DirectStatementInFile)),
        }
    }
}
