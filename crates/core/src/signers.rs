// Copyright (C) 2015-2025 The Neo Project.
//
// signers.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The ordered signer list of a transaction.

use crate::error::{CoreError, CoreResult};
use crate::signer::Signer;
use neo_nft_io::{helper, BinaryWriter, IoResult, Serializable};
use neo_nft_primitives::UInt160;
use std::collections::HashSet;

/// Maximum number of signers in one transaction.
pub const MAX_SIGNERS: usize = 16;

/// A non-empty, duplicate-free, ordered list of signers.
///
/// Order is significant: the first signer is the sender and pays the network
/// fee, and witnesses are attached in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signers(Vec<Signer>);

#[allow(clippy::len_without_is_empty)]
impl Signers {
    pub fn new(signers: Vec<Signer>) -> CoreResult<Self> {
        if signers.is_empty() {
            return Err(CoreError::EmptySigners);
        }
        if signers.len() > MAX_SIGNERS {
            return Err(CoreError::TooManySigners(signers.len()));
        }
        let mut seen = HashSet::with_capacity(signers.len());
        for signer in &signers {
            if !seen.insert(*signer.account()) {
                return Err(CoreError::DuplicateSigner(*signer.account()));
            }
        }
        Ok(Self(signers))
    }

    pub fn single(signer: Signer) -> Self {
        Self(vec![signer])
    }

    /// The fee-paying signer.
    pub fn sender(&self) -> &Signer {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[Signer] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Signer> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn accounts(&self) -> impl Iterator<Item = &UInt160> {
        self.0.iter().map(Signer::account)
    }
}

impl<'a> IntoIterator for &'a Signers {
    type Item = &'a Signer;
    type IntoIter = std::slice::Iter<'a, Signer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serializable for Signers {
    fn size(&self) -> usize {
        helper::get_array_size(&self.0)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        helper::serialize_array(&self.0, MAX_SIGNERS, "signers", writer)
    }
}
