//! Display formatting for transactions.

use serde::Serialize;

/// Renders an absolute amount in units of a mosaic with `divisibility`
/// decimal places, trimming trailing zeros.
///
/// # Examples
///
/// ```
/// use symwallet_core::transaction::relative_amount;
///
/// assert_eq!(relative_amount(1_500_000, 6), "1.5");
/// assert_eq!(relative_amount(20_000, 6), "0.02");
/// assert_eq!(relative_amount(42, 0), "42");
/// ```
pub fn relative_amount(amount: u64, divisibility: u8) -> String {
    if divisibility == 0 {
        return amount.to_string();
    }

    let digits = format!("{:0>width$}", amount, width = divisibility as usize + 1);
    let (whole, fraction) = digits.split_at(digits.len() - divisibility as usize);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Header fields shared by every confirmed or pending transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionHeader {
    /// Display tag of the transaction kind.
    pub tag: String,
    /// Block height; `None` while unconfirmed.
    pub block: Option<u64>,
    /// Transaction hash; `None` before announcement.
    pub hash: Option<String>,
}

/// Rows shown in a transaction detail dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionDetails {
    pub transfer_type: String,
    pub fee: String,
    pub block: String,
    pub hash: String,
}

impl TransactionDetails {
    /// Builds the detail rows for a transaction paying `max_fee`.
    ///
    /// # Arguments
    ///
    /// * `header` - Transaction header
    /// * `max_fee` - Fee in absolute units
    /// * `divisibility` - Divisibility of the network currency
    /// * `ticker` - Currency ticker appended to the fee
    pub fn new(header: &TransactionHeader, max_fee: u64, divisibility: u8, ticker: &str) -> Self {
        Self {
            transfer_type: header.tag.clone(),
            fee: format!("{}{}", relative_amount(max_fee, divisibility), ticker),
            block: header
                .block
                .map(|b| b.to_string())
                .unwrap_or_else(|| "-".to_string()),
            hash: header.hash.clone().unwrap_or_else(|| "-".to_string()),
        }
    }

    /// Returns the rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            ("transfer_type", self.transfer_type.as_str()),
            ("fee", self.fee.as_str()),
            ("block", self.block.as_str()),
            ("hash", self.hash.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_amount() {
        assert_eq!(relative_amount(0, 6), "0");
        assert_eq!(relative_amount(1, 6), "0.000001");
        assert_eq!(relative_amount(1_000_000, 6), "1");
        assert_eq!(relative_amount(123_456_789, 6), "123.456789");
        assert_eq!(relative_amount(u64::MAX, 0), "18446744073709551615");
    }

    #[test]
    fn test_details_for_confirmed_transaction() {
        let header = TransactionHeader {
            tag: "mosaic_alias".to_string(),
            block: Some(1024),
            hash: Some("AB12".to_string()),
        };
        let details = TransactionDetails::new(&header, 50_000, 6, " XYM");
        assert_eq!(
            details.rows(),
            [
                ("transfer_type", "mosaic_alias"),
                ("fee", "0.05 XYM"),
                ("block", "1024"),
                ("hash", "AB12"),
            ]
        );
    }

    #[test]
    fn test_details_for_unconfirmed_transaction() {
        let header = TransactionHeader {
            tag: "account_metadata".to_string(),
            ..TransactionHeader::default()
        };
        let details = TransactionDetails::new(&header, 0, 6, "");
        assert_eq!(details.block, "-");
        assert_eq!(details.hash, "-");
        assert_eq!(details.fee, "0");
    }
}
