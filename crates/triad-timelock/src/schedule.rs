//! Bootstrap stake schedule.
//!
//! Validator `i` (0-based, config order) stakes from `start_time` until
//!
//! ```text
//! start_time + initial_stake_duration + i × initial_stake_duration_offset
//! ```
//!
//! and the unlock tranches of the staked allocations are cut into `n` equal
//! shares, one per validator, in config order. A tranche that straddles a
//! share boundary is split in two and both halves keep its locktime. The last
//! validator absorbs the integer-division remainder.

use triad_core::error::GenesisError;
use triad_core::types::{Amount, LockedAmount, ShortId, Timestamp};
use tracing::debug;

/// Stake window of one bootstrap validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeWindow {
    /// 0-based position in the staker list.
    pub index: usize,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// The unlock tranches owned by one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressTranches {
    pub address: ShortId,
    pub tranches: Vec<LockedAmount>,
}

/// Sum amounts, failing instead of wrapping.
pub fn checked_total(
    amounts: impl IntoIterator<Item = Amount>,
    what: &'static str,
) -> Result<Amount, GenesisError> {
    amounts
        .into_iter()
        .try_fold(0u64, |acc, amount| acc.checked_add(amount))
        .ok_or(GenesisError::Overflow { what })
}

/// Shortest initial stake duration the offset allows for `stakers` validators:
/// `offset × (stakers - 1)`.
pub fn min_stake_duration(offset: u64, stakers: usize) -> Result<u64, GenesisError> {
    let steps = stakers.saturating_sub(1) as u64;
    offset.checked_mul(steps).ok_or(GenesisError::Overflow {
        what: "minimum stake duration",
    })
}

/// Stake windows for `count` validators, staggered by `offset`.
pub fn stake_windows(
    start: Timestamp,
    duration: u64,
    offset: u64,
    count: usize,
) -> Result<Vec<StakeWindow>, GenesisError> {
    (0..count)
        .map(|index| {
            offset
                .checked_mul(index as u64)
                .and_then(|stagger| stagger.checked_add(duration))
                .and_then(|length| length.checked_add(start))
                .map(|end| StakeWindow { index, start, end })
                .ok_or(GenesisError::Overflow {
                    what: "stake window end",
                })
        })
        .collect()
}

/// Drop zero-amount tranches; they create no output.
pub fn nonzero_tranches(tranches: &[LockedAmount]) -> impl Iterator<Item = &LockedAmount> {
    tranches.iter().filter(|t| t.amount > 0)
}

/// Split the tranches of `allocations` into `parts` shares of equal weight.
///
/// Always returns exactly `parts` shares (empty shares when there is nothing
/// to distribute). Zero-amount pieces are never emitted.
pub fn split_tranches(
    allocations: &[AddressTranches],
    parts: usize,
) -> Result<Vec<Vec<AddressTranches>>, GenesisError> {
    if parts == 0 {
        return Ok(Vec::new());
    }
    let total = checked_total(
        allocations
            .iter()
            .flat_map(|a| a.tranches.iter().map(|t| t.amount)),
        "staked amount",
    )?;
    let weight = total / parts as u64;
    debug!(total, parts, weight, "splitting staked tranches");

    let mut shares: Vec<Vec<AddressTranches>> = Vec::with_capacity(parts);
    let mut share: Vec<AddressTranches> = Vec::new();
    let mut filled: Amount = 0;

    for allocation in allocations {
        let mut current = AddressTranches {
            address: allocation.address,
            tranches: Vec::new(),
        };
        for tranche in &allocation.tranches {
            let mut remaining = tranche.amount;
            // `filled <= weight` holds for every share except the last.
            while shares.len() + 1 < parts && remaining > weight - filled {
                let take = weight - filled;
                if take > 0 {
                    current.tranches.push(LockedAmount {
                        amount: take,
                        locktime: tranche.locktime,
                    });
                }
                remaining -= take;
                let full = std::mem::replace(
                    &mut current,
                    AddressTranches {
                        address: allocation.address,
                        tranches: Vec::new(),
                    },
                );
                if !full.tranches.is_empty() {
                    share.push(full);
                }
                shares.push(std::mem::take(&mut share));
                filled = 0;
            }
            if remaining > 0 {
                filled += remaining;
                current.tranches.push(LockedAmount {
                    amount: remaining,
                    locktime: tranche.locktime,
                });
            }
        }
        if !current.tranches.is_empty() {
            share.push(current);
        }
    }
    shares.push(share);
    shares.resize_with(parts, Vec::new);
    Ok(shares)
}
