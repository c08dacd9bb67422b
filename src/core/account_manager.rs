//! Account management module
//!
//! This module provides the `AccountManager` struct, which orchestrates every
//! ledger operation: validate the primitive inputs, build the record, check
//! for duplicates where applicable, and persist through the record stores.
//!
//! The AccountManager is responsible for:
//! - Recording transfer requests, rejecting duplicates by business fields
//! - Recording deposits read from a JSON input document
//! - Computing balances from the external transactions collection and
//!   appending a snapshot to the balance history
//!
//! All validation happens before any store is touched, so an invalid input
//! never causes a partial write. The manager carries no mutable state of its
//! own: it only knows where the stores live.

use crate::core::balance::sum_for_iban;
use crate::core::config::StoreConfig;
use crate::core::traits::RecordStore;
use crate::io::json_store::{read_json, JsonStore, MissingFilePolicy};
use crate::types::{
    AccountDeposit, BalanceSnapshot, DepositInput, LedgerError, Transaction, TransferRequest,
};
use crate::validation::{
    validate_concept, validate_deposit_amount, validate_iban, validate_transfer_amount,
    validate_transfer_date, validate_transfer_type,
};
use std::path::Path;
use tracing::{info, warn};

/// Orchestrates validation and persistence of transfers, deposits and balances
#[derive(Debug, Clone)]
pub struct AccountManager {
    config: StoreConfig,
    transfers: JsonStore<TransferRequest>,
    deposits: JsonStore<AccountDeposit>,
    transactions: JsonStore<Transaction>,
    balances: JsonStore<BalanceSnapshot>,
}

impl AccountManager {
    /// Create an AccountManager over the given store locations
    ///
    /// No file is touched until an operation runs.
    pub fn new(config: StoreConfig) -> Self {
        AccountManager {
            transfers: JsonStore::new(&config.transfers, MissingFilePolicy::Empty),
            deposits: JsonStore::new(&config.deposits, MissingFilePolicy::Empty),
            transactions: JsonStore::new(&config.transactions, MissingFilePolicy::Required),
            balances: JsonStore::new(&config.balances, MissingFilePolicy::Empty),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Record a transfer request
    ///
    /// # Arguments
    ///
    /// * `from_iban` / `to_iban` - Spanish IBANs
    /// * `concept` - 10 to 30 characters, at least two words of letters
    /// * `transfer_type` - `ORDINARY`, `INMEDIATE` or `URGENT`
    /// * `date` - `dd/mm/yyyy`, today or later, year 2025..=2050
    /// * `amount` - decimal text, at most 2 decimals, 10.00..=10000.00
    ///
    /// # Returns
    ///
    /// The transfer code of the new record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any field fails validation (checked in argument order, first failure wins)
    /// - A transfer with the same six business fields is already recorded
    /// - The transfer store is malformed or cannot be written
    pub fn transfer_request(
        &self,
        from_iban: &str,
        to_iban: &str,
        concept: &str,
        transfer_type: &str,
        date: &str,
        amount: &str,
    ) -> Result<String, LedgerError> {
        let from_iban = validate_iban(from_iban)?;
        let to_iban = validate_iban(to_iban)?;
        validate_concept(concept)?;
        let transfer_type = validate_transfer_type(transfer_type)?;
        validate_transfer_date(date)?;
        let amount = validate_transfer_amount(amount)?;

        let request = TransferRequest::new(
            from_iban,
            to_iban,
            concept.to_string(),
            transfer_type,
            date.to_string(),
            amount,
        );

        self.transfers.update(|transfers| {
            if transfers
                .iter()
                .any(|existing| existing.same_business_fields(&request))
            {
                warn!(
                    from = %request.from_iban,
                    to = %request.to_iban,
                    date = %request.transfer_date,
                    "duplicate transfer rejected"
                );
                return Err(LedgerError::DuplicateTransfer);
            }
            transfers.push(request.clone());
            Ok(())
        })?;

        info!(
            transfer_code = %request.transfer_code,
            amount = %request.transfer_amount,
            "transfer recorded"
        );
        Ok(request.transfer_code)
    }

    /// Record a deposit described by a JSON input file
    ///
    /// The file must hold `{"IBAN": "...", "AMOUNT": "EUR dddd.dd"}`.
    ///
    /// # Returns
    ///
    /// The deposit signature of the new record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file is missing (`StoreNotFound`) or not a JSON object (`MalformedStore`)
    /// - `IBAN` or `AMOUNT` is missing (`MissingKey`)
    /// - The IBAN or amount is invalid, or the amount is zero
    /// - The deposit store is malformed or cannot be written
    pub fn deposit_into_account(&self, input: impl AsRef<Path>) -> Result<String, LedgerError> {
        let input = input.as_ref();
        let document: DepositInput = read_json(input, MissingFilePolicy::Required)?
            .ok_or_else(|| LedgerError::store_not_found(input))?;

        let iban = document.iban.ok_or_else(|| LedgerError::missing_key("IBAN"))?;
        let amount = document
            .amount
            .ok_or_else(|| LedgerError::missing_key("AMOUNT"))?;

        self.deposit(&iban, &amount)
    }

    /// Record a deposit from already-decoded fields
    ///
    /// Deposits are not checked for duplicates: two identical deposits are
    /// two deposits.
    pub fn deposit(&self, iban: &str, amount: &str) -> Result<String, LedgerError> {
        let iban = validate_iban(iban)?;
        let amount = validate_deposit_amount(amount)?;

        let deposit = AccountDeposit::new(iban, amount);
        let signature = deposit.deposit_signature.clone();
        self.deposits.append(deposit)?;

        info!(deposit_signature = %signature, amount = %amount, "deposit recorded");
        Ok(signature)
    }

    /// Load the external transactions collection
    ///
    /// Fails with `StoreNotFound` if the file does not exist.
    pub fn read_transactions(&self) -> Result<Vec<Transaction>, LedgerError> {
        self.transactions.load()
    }

    /// Compute the balance of an account and append it to the balance history
    ///
    /// The balance is the sum of every transaction on `iban`. On success the
    /// snapshot is persisted and also returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The IBAN is invalid
    /// - The transactions file is missing or malformed
    /// - No transaction references the IBAN (`IbanNotFound`, nothing is written)
    /// - The sum leaves the `Decimal` range (`ArithmeticOverflow`, nothing is written)
    /// - The balance store is malformed or cannot be written
    pub fn calculate_balance(&self, iban: &str) -> Result<BalanceSnapshot, LedgerError> {
        let iban = validate_iban(iban)?;
        let transactions = self.read_transactions()?;

        let Some(balance) = sum_for_iban(&transactions, iban.as_str())? else {
            warn!(iban = %iban, "no transactions for IBAN");
            return Err(LedgerError::iban_not_found(iban.as_str()));
        };

        let snapshot = BalanceSnapshot::new(iban.as_str(), balance);
        self.balances.append(snapshot.clone())?;

        info!(iban = %iban, balance = %balance, "balance snapshot recorded");
        Ok(snapshot)
    }

    /// Read the balance history, optionally restricted to one IBAN
    pub fn balance_history(&self, iban: Option<&str>) -> Result<Vec<BalanceSnapshot>, LedgerError> {
        let mut snapshots = self.balances.load()?;
        if let Some(iban) = iban {
            snapshots.retain(|snapshot| snapshot.iban == iban);
        }
        Ok(snapshots)
    }

    /// Every recorded transfer, in insertion order
    pub fn transfers(&self) -> Result<Vec<TransferRequest>, LedgerError> {
        self.transfers.load()
    }

    /// Every recorded deposit, in insertion order
    pub fn deposits(&self) -> Result<Vec<AccountDeposit>, LedgerError> {
        self.deposits.load()
    }
}

impl Default for AccountManager {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
