use std::collections::{BTreeMap, btree_map};

use log::debug;
use num_bigint_dig::BigUint;

use crate::{Error, Result};

/// One evaluation of the sharing polynomial.
///
/// `index` is zero-based; the polynomial was evaluated at `x = index + 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    index: u32,
    value: BigUint,
}

impl Share {
    pub fn new(index: u32, value: BigUint) -> Self {
        Self { index, value }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The x-coordinate this share was evaluated at.
    pub fn abscissa(&self) -> u64 {
        u64::from(self.index) + 1
    }
}

/// Shares keyed by index.
///
/// An exact duplicate collapses into the existing entry. A second share with
/// the same index but a different value cannot be interpolated and is
/// rejected with [`Error::NotInvertible`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareSet {
    shares: BTreeMap<u32, Share>,
}

impl ShareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any collection of shares, collapsing exact duplicates.
    pub fn try_from_shares<I>(shares: I) -> Result<Self>
    where
        I: IntoIterator<Item = Share>,
    {
        let mut set = Self::new();
        for share in shares {
            set.insert(share)?;
        }
        Ok(set)
    }

    /// Insert a share. Returns `Ok(false)` if an identical share was already
    /// present.
    pub fn insert(&mut self, share: Share) -> Result<bool> {
        match self.shares.entry(share.index) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(share);
                Ok(true)
            }
            btree_map::Entry::Occupied(entry) if entry.get().value == share.value => Ok(false),
            btree_map::Entry::Occupied(entry) => {
                debug!("conflicting values for share index {}", entry.key());
                Err(Error::NotInvertible)
            }
        }
    }

    pub fn get(&self, index: u32) -> Option<&Share> {
        self.shares.get(&index)
    }

    pub fn contains(&self, index: u32) -> bool {
        self.shares.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Shares in ascending index order.
    pub fn iter(&self) -> btree_map::Values<'_, u32, Share> {
        self.shares.values()
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<u32, Share> {
        &self.shares
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = btree_map::Values<'a, u32, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ShareSet {
    type Item = Share;
    type IntoIter = btree_map::IntoValues<u32, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.into_values()
    }
}

/// The complete output of a split: the shares and the modulus they were
/// computed under. Both are needed to combine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitResult {
    shares: ShareSet,
    modulus: BigUint,
}

impl SplitResult {
    pub(crate) fn new(shares: ShareSet, modulus: BigUint) -> Self {
        Self { shares, modulus }
    }

    pub fn shares(&self) -> &ShareSet {
        &self.shares
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn into_parts(self) -> (ShareSet, BigUint) {
        (self.shares, self.modulus)
    }
}
