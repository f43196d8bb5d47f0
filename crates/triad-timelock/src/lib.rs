//! triad-timelock
//!
//! Unlock-tranche arithmetic for genesis: bootstrap stake windows, the even
//! split of staked tranches across bootstrap validators, and checked sums.
//! Everything here is pure and overflow-checked.

pub mod schedule;

pub use schedule::{
    checked_total, min_stake_duration, nonzero_tranches, split_tranches, stake_windows,
    AddressTranches, StakeWindow,
};
