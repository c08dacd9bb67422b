//! End-to-end ledger tests
//!
//! Each test runs an `AccountManager` against a fresh temporary data
//! directory. Deposit inputs and the external transactions collection come
//! from JSON fixtures under `tests/fixtures/`:
//! - `deposits/` - one deposit input document per scenario
//! - `transactions/transactions.json` - external movements for balance queries

#[cfg(test)]
mod tests {
    use iban_ledger::{AccountManager, LedgerError, StoreConfig};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const FROM: &str = "ES9121000418450200051332";
    const TO: &str = "ES6000491500051234567892";
    const CONCEPT: &str = "Monthly rent payment";
    const DATE: &str = "01/06/2049";

    fn fixture(relative: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(relative)
    }

    /// Fresh manager over an empty temporary data directory
    fn ledger() -> (TempDir, AccountManager) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let manager = AccountManager::new(StoreConfig::from_dir(dir.path()));
        (dir, manager)
    }

    /// Fresh manager whose transactions file is a copy of the fixture
    fn ledger_with_transactions() -> (TempDir, AccountManager) {
        let (dir, manager) = ledger();
        fs::copy(
            fixture("transactions/transactions.json"),
            &manager.config().transactions,
        )
        .expect("Failed to copy transactions fixture");
        (dir, manager)
    }

    #[rstest]
    #[case::below_minimum("9.99", false)]
    #[case::minimum("10.00", true)]
    #[case::maximum("10000.00", true)]
    #[case::above_maximum("10000.01", false)]
    fn test_transfer_amount_boundaries(#[case] amount: &str, #[case] accepted: bool) {
        let (_dir, manager) = ledger();

        let result = manager.transfer_request(FROM, TO, CONCEPT, "ORDINARY", DATE, amount);

        if accepted {
            assert!(result.is_ok(), "{} should be accepted: {:?}", amount, result);
        } else {
            assert!(
                matches!(result, Err(LedgerError::InvalidAmount { .. })),
                "{} should be rejected: {:?}",
                amount,
                result
            );
            assert!(!manager.config().transfers.exists());
        }
    }

    #[test]
    fn test_identical_transfer_recorded_once() {
        let (_dir, manager) = ledger();

        let code = manager
            .transfer_request(FROM, TO, CONCEPT, "INMEDIATE", DATE, "500.00")
            .unwrap();
        let second = manager.transfer_request(FROM, TO, CONCEPT, "INMEDIATE", DATE, "500.00");

        assert_eq!(second, Err(LedgerError::DuplicateTransfer));
        let transfers = manager.transfers().unwrap();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].transfer_code, code);
    }

    #[rstest]
    #[case::other_type(FROM, TO, CONCEPT, "URGENT", DATE, "500.00")]
    #[case::other_amount(FROM, TO, CONCEPT, "INMEDIATE", DATE, "500.01")]
    #[case::other_date(FROM, TO, CONCEPT, "INMEDIATE", "02/06/2049", "500.00")]
    #[case::other_concept(FROM, TO, "Monthly rent payments", "INMEDIATE", DATE, "500.00")]
    #[case::swapped_accounts(TO, FROM, CONCEPT, "INMEDIATE", DATE, "500.00")]
    fn test_transfer_differing_in_one_field_is_recorded(
        #[case] from: &str,
        #[case] to: &str,
        #[case] concept: &str,
        #[case] transfer_type: &str,
        #[case] date: &str,
        #[case] amount: &str,
    ) {
        let (_dir, manager) = ledger();
        manager
            .transfer_request(FROM, TO, CONCEPT, "INMEDIATE", DATE, "500.00")
            .unwrap();

        manager
            .transfer_request(from, to, concept, transfer_type, date, amount)
            .unwrap();

        assert_eq!(manager.transfers().unwrap().len(), 2);
    }

    #[rstest]
    #[case::bad_from_format("ES91", TO, CONCEPT, "ORDINARY", DATE, "InvalidFormat")]
    #[case::bad_to_check_digit(FROM, "ES6100491500051234567892", CONCEPT, "ORDINARY", DATE, "InvalidCheckDigit")]
    #[case::bad_concept(FROM, TO, "Rent", "ORDINARY", DATE, "InvalidConcept")]
    #[case::corrected_spelling(FROM, TO, CONCEPT, "IMMEDIATE", DATE, "InvalidTransferType")]
    #[case::past_date(FROM, TO, CONCEPT, "ORDINARY", "01/01/2025", "InvalidDate")]
    #[case::far_future(FROM, TO, CONCEPT, "ORDINARY", "01/01/2051", "InvalidDate")]
    #[case::impossible_date(FROM, TO, CONCEPT, "ORDINARY", "30/02/2049", "InvalidDate")]
    fn test_transfer_validation_errors(
        #[case] from: &str,
        #[case] to: &str,
        #[case] concept: &str,
        #[case] transfer_type: &str,
        #[case] date: &str,
        #[case] expected: &str,
    ) {
        let (_dir, manager) = ledger();

        let error = manager
            .transfer_request(from, to, concept, transfer_type, date, "100.00")
            .unwrap_err();

        let kind = match error {
            LedgerError::InvalidFormat { .. } => "InvalidFormat",
            LedgerError::InvalidCheckDigit { .. } => "InvalidCheckDigit",
            LedgerError::InvalidConcept { .. } => "InvalidConcept",
            LedgerError::InvalidTransferType { .. } => "InvalidTransferType",
            LedgerError::InvalidDate { .. } => "InvalidDate",
            other => panic!("unexpected error: {}", other),
        };
        assert_eq!(kind, expected);
        assert!(!manager.config().transfers.exists());
    }

    #[test]
    fn test_transfer_store_round_trips_fields() {
        let (_dir, manager) = ledger();

        manager
            .transfer_request(FROM, TO, CONCEPT, "URGENT", DATE, "1234.5")
            .unwrap();

        let content = fs::read_to_string(&manager.config().transfers).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&content).unwrap();
        let record = &raw[0];
        assert_eq!(record["from_iban"], FROM);
        assert_eq!(record["to_iban"], TO);
        assert_eq!(record["transfer_concept"], CONCEPT);
        assert_eq!(record["transfer_type"], "URGENT");
        assert_eq!(record["transfer_date"], DATE);
        assert_eq!(record["transfer_amount"], 1234.5);
        assert!(content.starts_with("[\n  {\n    \"from_iban\""));

        let transfers = manager.transfers().unwrap();
        assert_eq!(transfers[0].transfer_amount, Decimal::new(123450, 2));
        assert_eq!(transfers[0].transfer_code, record["transfer_code"].as_str().unwrap());
    }

    #[test]
    fn test_malformed_transfer_store_is_not_overwritten() {
        let (_dir, manager) = ledger();
        fs::write(&manager.config().transfers, "not json").unwrap();

        let result = manager.transfer_request(FROM, TO, CONCEPT, "ORDINARY", DATE, "50.00");

        assert!(matches!(result, Err(LedgerError::MalformedStore { .. })));
        assert_eq!(
            fs::read_to_string(&manager.config().transfers).unwrap(),
            "not json"
        );
    }

    #[test]
    fn test_valid_deposit_is_recorded() {
        let (_dir, manager) = ledger();

        let signature = manager
            .deposit_into_account(fixture("deposits/valid.json"))
            .unwrap();

        let deposits = manager.deposits().unwrap();
        assert_eq!(deposits.len(), 1);
        assert_eq!(deposits[0].to_iban.as_str(), FROM);
        assert_eq!(deposits[0].deposit_amount, Decimal::new(1050, 2));
        assert_eq!(deposits[0].deposit_signature, signature);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&manager.config().deposits).unwrap())
                .unwrap();
        assert_eq!(raw[0]["deposit_amount"], 10.5);
    }

    #[rstest]
    #[case::zero_amount("deposits/zero_amount.json", LedgerError::ZeroDeposit)]
    #[case::missing_iban("deposits/missing_iban.json", LedgerError::missing_key("IBAN"))]
    #[case::missing_amount("deposits/missing_amount.json", LedgerError::missing_key("AMOUNT"))]
    #[case::bad_amount(
        "deposits/bad_amount.json",
        LedgerError::invalid_deposit_amount("EUR 10.50")
    )]
    #[case::bad_iban_format(
        "deposits/bad_iban_format.json",
        LedgerError::invalid_format("ES91210004184502")
    )]
    #[case::bad_check_digit(
        "deposits/bad_check_digit.json",
        LedgerError::invalid_check_digit("ES9121000418450200051333", 64, 91)
    )]
    fn test_deposit_rejections(#[case] input: &str, #[case] expected: LedgerError) {
        let (_dir, manager) = ledger();

        let result = manager.deposit_into_account(fixture(input));

        assert_eq!(result, Err(expected));
        assert!(!manager.config().deposits.exists());
    }

    #[rstest]
    #[case::malformed("deposits/malformed.json")]
    #[case::not_an_object("deposits/not_an_object.json")]
    fn test_unreadable_deposit_input(#[case] input: &str) {
        let (_dir, manager) = ledger();

        let result = manager.deposit_into_account(fixture(input));

        assert!(matches!(result, Err(LedgerError::MalformedStore { .. })));
    }

    #[test]
    fn test_balance_sums_string_and_number_amounts() {
        let (_dir, manager) = ledger_with_transactions();

        let snapshot = manager.calculate_balance(FROM).unwrap();

        assert_eq!(snapshot.balance, Decimal::new(7025, 2));
        let history = manager.balance_history(Some(FROM)).unwrap();
        assert_eq!(history, vec![snapshot]);
    }

    #[test]
    fn test_each_balance_query_appends_a_snapshot() {
        let (_dir, manager) = ledger_with_transactions();

        manager.calculate_balance(FROM).unwrap();
        manager.calculate_balance(TO).unwrap();
        manager.calculate_balance(FROM).unwrap();

        let history = manager.balance_history(None).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].iban, TO);
        assert_eq!(history[1].balance, Decimal::new(250075, 2));
        assert!(history[0].time <= history[2].time);
    }

    #[test]
    fn test_unknown_iban_appends_nothing() {
        let (_dir, manager) = ledger_with_transactions();

        let result = manager.calculate_balance("ES3501821234561234567890");

        assert_eq!(
            result,
            Err(LedgerError::iban_not_found("ES3501821234561234567890"))
        );
        assert!(!manager.config().balances.exists());
    }

    #[test]
    fn test_transactions_are_never_modified() {
        let (_dir, manager) = ledger_with_transactions();
        let before = fs::read_to_string(&manager.config().transactions).unwrap();

        manager.calculate_balance(FROM).unwrap();

        let after = fs::read_to_string(&manager.config().transactions).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_balance_file_shape() {
        let (_dir, manager) = ledger_with_transactions();

        manager.calculate_balance(FROM).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&manager.config().balances).unwrap())
                .unwrap();
        assert_eq!(raw[0]["IBAN"], FROM);
        assert_eq!(raw[0]["BALANCE"], 70.25);
        assert!(raw[0]["time"].is_f64());
    }
}
