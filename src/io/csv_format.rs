//! CSV output for parsed statements
//!
//! This module centralizes all output format concerns, providing:
//! - Row structures for the `raw` and `display` projections
//! - Display formatting of amounts and counter-party accounts
//! - Serialization of a whole batch to CSV
//!
//! Formatting helpers are pure (no I/O) for easy testing.

use crate::cli::OutputFormat;
use crate::types::{strip_leading_zeros, AboError, ProcessedFile, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

const RAW_HEADER: [&str; 9] = [
    "file",
    "own_account",
    "other_account_scrambled",
    "other_account",
    "bank_code",
    "id",
    "amount",
    "variable_symbol",
    "note",
];

const DISPLAY_HEADER: [&str; 7] = [
    "file",
    "own_account",
    "other_account_scrambled",
    "other_account",
    "amount",
    "variable_symbol",
    "note",
];

/// Transaction with every field exactly as extracted
#[derive(Debug, Serialize, PartialEq)]
struct RawRow<'a> {
    file: &'a str,
    own_account: &'a str,
    other_account_scrambled: &'a str,
    other_account: &'a str,
    bank_code: &'a str,
    id: &'a str,
    amount: &'a str,
    variable_symbol: &'a str,
    note: &'a str,
}

impl<'a> RawRow<'a> {
    fn new(file: &'a str, tx: &'a Transaction) -> Self {
        RawRow {
            file,
            own_account: &tx.own_account,
            other_account_scrambled: &tx.other_account_scrambled,
            other_account: tx.other_account.as_str(),
            bank_code: &tx.bank_code,
            id: &tx.id,
            amount: &tx.amount,
            variable_symbol: &tx.variable_symbol,
            note: &tx.note,
        }
    }
}

/// Transaction formatted for people to read
#[derive(Debug, Serialize, PartialEq)]
struct DisplayRow<'a> {
    file: &'a str,
    own_account: &'a str,
    other_account_scrambled: &'a str,
    other_account: String,
    amount: String,
    variable_symbol: &'a str,
    note: &'a str,
}

impl<'a> DisplayRow<'a> {
    fn new(file: &'a str, tx: &'a Transaction) -> Self {
        DisplayRow {
            file,
            own_account: strip_leading_zeros(&tx.own_account),
            other_account_scrambled: strip_leading_zeros(&tx.other_account_scrambled),
            other_account: format_counterparty(tx),
            amount: format_amount(&tx.amount),
            variable_symbol: &tx.variable_symbol,
            note: &tx.note,
        }
    }
}

/// Counter-party account in the usual `number/bank` notation
pub fn format_counterparty(tx: &Transaction) -> String {
    format!("{}/{}", tx.other_account.display(), tx.bank_code)
}

/// Format a signed minor-unit amount with a decimal comma
///
/// `-000000012345` becomes `-123,45`. Values that are not digit strings fall
/// back to text formatting: leading zeros are stripped and a comma is placed
/// before the last two characters.
pub fn format_amount(amount: &str) -> String {
    let (sign, magnitude) = match amount.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", amount),
    };

    if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(minor_units) = magnitude.parse::<i64>() {
            let value = Decimal::new(minor_units, 2);
            return format!("{}{}", sign, value).replace('.', ",");
        }
    }

    insert_comma_before_last_two(strip_leading_zeros(amount))
}

fn insert_comma_before_last_two(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < 2 {
        return value.to_string();
    }
    let split = chars.len() - 2;
    let head: String = chars[..split].iter().collect();
    let tail: String = chars[split..].iter().collect();
    format!("{},{}", head, tail)
}

/// Write every transaction of every file as CSV
///
/// Files are written in the given order and transactions in record order.
/// Files that could not be read contribute no rows. The header is always
/// written, even for an empty batch.
pub fn write_transactions_csv(
    files: &[ProcessedFile],
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), AboError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    match format {
        OutputFormat::Raw => writer.write_record(RAW_HEADER)?,
        OutputFormat::Display => writer.write_record(DISPLAY_HEADER)?,
    }

    for file in files {
        for tx in &file.transactions {
            match format {
                OutputFormat::Raw => writer.serialize(RawRow::new(&file.name, tx))?,
                OutputFormat::Display => writer.serialize(DisplayRow::new(&file.name, tx))?,
            }
        }
    }

    writer
        .flush()
        .map_err(|e| AboError::output(format!("Failed to flush output: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descrambler::descramble;
    use rstest::rstest;

    fn transaction(amount: &str, note: &str) -> Transaction {
        Transaction {
            own_account: "0000000019000123".to_string(),
            other_account_scrambled: "0123456789012345".to_string(),
            other_account: descramble("0123456789012345"),
            id: "0000000000042".to_string(),
            amount: amount.to_string(),
            variable_symbol: "0000000777".to_string(),
            bank_code: "0800".to_string(),
            note: note.to_string(),
        }
    }

    #[rstest]
    #[case::credit("000000012345", "123,45")]
    #[case::debit("-000000012345", "-123,45")]
    #[case::cents_only("000000000005", "0,05")]
    #[case::zero("000000000000", "0,00")]
    #[case::large("999999999999", "9999999999,99")]
    #[case::empty("", "")]
    #[case::sign_only("-", "-")]
    #[case::non_digits("00000ABCDE", "ABC,DE")]
    #[case::single_char_fallback("0000X", "X")]
    fn test_format_amount(#[case] amount: &str, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_format_counterparty() {
        let tx = transaction("000000012345", "");
        assert_eq!(format_counterparty(&tx), "5341678902012345/0800");
    }

    #[test]
    fn test_write_raw_csv() {
        let files = vec![ProcessedFile::new("a.gpc", vec![transaction("000000012345", "RENT")])];
        let mut output = Vec::new();
        write_transactions_csv(&files, OutputFormat::Raw, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "file,own_account,other_account_scrambled,other_account,bank_code,id,amount,variable_symbol,note\n\
             a.gpc,0000000019000123,0123456789012345,5341678902012345,0800,0000000000042,000000012345,0000000777,RENT\n"
        );
    }

    #[test]
    fn test_write_display_csv() {
        let files = vec![ProcessedFile::new("a.gpc", vec![transaction("-000000012345", "RENT")])];
        let mut output = Vec::new();
        write_transactions_csv(&files, OutputFormat::Display, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "file,own_account,other_account_scrambled,other_account,amount,variable_symbol,note\n\
             a.gpc,19000123,123456789012345,5341678902012345/0800,\"-123,45\",0000000777,RENT\n"
        );
    }

    #[rstest]
    #[case::raw(OutputFormat::Raw, "file,own_account,other_account_scrambled,other_account,bank_code,id,amount,variable_symbol,note\n")]
    #[case::display(OutputFormat::Display, "file,own_account,other_account_scrambled,other_account,amount,variable_symbol,note\n")]
    fn test_empty_batch_writes_header_only(#[case] format: OutputFormat, #[case] expected: &str) {
        let files = vec![
            ProcessedFile::new("empty.gpc", vec![]),
            ProcessedFile::failed("gone.gpc", AboError::file_not_found("gone.gpc")),
        ];
        let mut output = Vec::new();
        write_transactions_csv(&files, format, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_files_and_records_keep_order() {
        let files = vec![
            ProcessedFile::new("b.gpc", vec![transaction("1", "first"), transaction("2", "second")]),
            ProcessedFile::new("a.gpc", vec![transaction("3", "third")]),
        ];
        let mut output = Vec::new();
        write_transactions_csv(&files, OutputFormat::Raw, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let notes: Vec<&str> = output_str
            .lines()
            .skip(1)
            .map(|line| line.rsplit(',').next().unwrap())
            .collect();
        assert_eq!(notes, vec!["first", "second", "third"]);
    }
}
