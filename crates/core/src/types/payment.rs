//! Payment method selection.
//!
//! Placeholder presentation glue only: no gateway integration. The
//! checkout flow records which method the customer picked and shows the
//! matching instructions.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// QR-code mobile wallet.
    Wallet,
    /// PayPal redirect.
    Paypal,
}

impl PaymentMethod {
    /// Human-readable label for the method.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Wallet => "Mobile wallet",
            Self::Paypal => "PayPal",
        }
    }

    /// Instruction text shown once the method is selected.
    #[must_use]
    pub const fn instructions(&self) -> &'static str {
        match self {
            Self::Card => "Enter your card number, expiry date and CVV.",
            Self::Wallet => "Scan the QR code with your wallet app to complete the payment.",
            Self::Paypal => "You will be redirected to PayPal to complete the payment.",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "wallet" => Ok(Self::Wallet),
            "paypal" => Ok(Self::Paypal),
            other => Err(format!("unknown payment method: {other}")),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Card".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert_eq!("wallet".parse::<PaymentMethod>(), Ok(PaymentMethod::Wallet));
        assert_eq!("PAYPAL".parse::<PaymentMethod>(), Ok(PaymentMethod::Paypal));
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }
}
