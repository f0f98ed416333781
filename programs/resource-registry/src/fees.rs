//! Value transfer capability used to collect the registration fee.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use std::collections::BTreeMap;

use crate::errors::ResourceRegistryError;

/// Moves `amount` from `from` to `to`, or fails without moving anything.
pub trait FeeTransfer {
    fn transfer(&mut self, amount: u64, from: &Pubkey, to: &Pubkey) -> Result<()>;
}

/// Lamport transfer through the System Program.
/// The payer must sign the instruction; the collector account must be the
/// configured authority contract.
pub struct SystemTransfer<'info> {
    payer: AccountInfo<'info>,
    collector: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
}

impl<'info> SystemTransfer<'info> {
    pub fn new(
        payer: AccountInfo<'info>,
        collector: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
    ) -> Self {
        Self {
            payer,
            collector,
            system_program,
        }
    }
}

impl FeeTransfer for SystemTransfer<'_> {
    fn transfer(&mut self, amount: u64, from: &Pubkey, to: &Pubkey) -> Result<()> {
        require_keys_eq!(*self.payer.key, *from, ResourceRegistryError::NotAuthorized);
        require_keys_eq!(
            *self.collector.key,
            *to,
            ResourceRegistryError::FeeCollectorMismatch
        );

        let cpi_ctx = CpiContext::new(
            self.system_program.clone(),
            Transfer {
                from: self.payer.clone(),
                to: self.collector.clone(),
            },
        );
        system_program::transfer(cpi_ctx, amount)
            .map_err(|_| error!(ResourceRegistryError::FeeTransferFailed))
    }
}

/// A single recorded transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    pub amount: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}

/// Deterministic balance ledger for off-chain hosts.
///
/// Principals without an explicit balance are treated as unfunded unless the
/// ledger was created with `unmetered`, in which case every transfer succeeds
/// and is only recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryLedger {
    balances: BTreeMap<Pubkey, u64>,
    transfers: Vec<TransferRecord>,
    metered: bool,
}

impl MemoryLedger {
    pub fn metered() -> Self {
        Self {
            metered: true,
            ..Self::default()
        }
    }

    pub fn unmetered() -> Self {
        Self::default()
    }

    pub fn fund(&mut self, principal: Pubkey, amount: u64) {
        let balance = self.balances.entry(principal).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    pub fn balance(&self, principal: &Pubkey) -> u64 {
        self.balances.get(principal).copied().unwrap_or(0)
    }

    pub fn transfers(&self) -> &[TransferRecord] {
        &self.transfers
    }
}

impl FeeTransfer for MemoryLedger {
    fn transfer(&mut self, amount: u64, from: &Pubkey, to: &Pubkey) -> Result<()> {
        if self.metered {
            let from_balance = self.balance(from);
            let to_balance = self.balance(to);
            let debited = from_balance
                .checked_sub(amount)
                .ok_or_else(|| error!(ResourceRegistryError::FeeTransferFailed))?;
            let credited = to_balance
                .checked_add(amount)
                .ok_or_else(|| error!(ResourceRegistryError::MathOverflow))?;
            self.balances.insert(*from, debited);
            self.balances.insert(*to, credited);
        }

        self.transfers.push(TransferRecord {
            amount,
            from: *from,
            to: *to,
        });
        Ok(())
    }
}
