//! ERC-20 transfer call construction.
//!
//! Pure data construction: scale the decimal amount to base units and encode
//! the `transfer(address,uint256)` calldata. The only runtime failure is a
//! malformed amount string; everything else here is static data.

// The sol! macro generates code that we can't document, so allow missing_docs
#![allow(missing_docs)]

use alloy_primitives::U256;
use alloy_sol_types::{sol, SolCall};

use crate::error::{PaymentError, PaymentResult};
use crate::networks::NetworkSpec;
use crate::wallet::TransactionRequest;

sol! {
    /// Minimal ERC-20 surface the bridge needs.
    interface IERC20 {
        /// Moves `amount` base units to `to`.
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// Scales a decimal amount string to token base units.
///
/// `"1"` with 6 decimals yields `1_000_000`; `"2.5"` yields `2_500_000`.
/// Rejects empty input, non-digit characters, and fractional parts longer
/// than the token's decimal count (no silent rounding).
pub fn parse_units(amount: &str, decimals: u8) -> PaymentResult<U256> {
    let invalid = |reason: &str| PaymentError::InvalidAmount {
        amount: amount.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = amount.trim();
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (trimmed, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid("empty amount"));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid("non-decimal characters"));
    }
    if frac_part.len() > usize::from(decimals) {
        return Err(invalid("more fractional digits than token decimals"));
    }

    let scale = U256::from(10u64).pow(U256::from(decimals));
    let int_units = if int_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_part, 10).map_err(|_| invalid("integer part out of range"))?
    };

    let frac_units = if frac_part.is_empty() {
        U256::ZERO
    } else {
        let raw =
            U256::from_str_radix(frac_part, 10).map_err(|_| invalid("fraction out of range"))?;
        let shift = u8::try_from(usize::from(decimals) - frac_part.len())
            .map_err(|_| invalid("fraction out of range"))?;
        raw * U256::from(10u64).pow(U256::from(shift))
    };

    int_units
        .checked_mul(scale)
        .and_then(|units| units.checked_add(frac_units))
        .ok_or_else(|| invalid("amount overflows u256"))
}

/// Builds the zero-native-value transfer call for a network slot.
pub fn build_transfer(spec: &NetworkSpec, amount: &str) -> PaymentResult<TransactionRequest> {
    let units = parse_units(amount, spec.decimals)?;
    let call = IERC20::transferCall {
        to: spec.recipient,
        amount: units,
    };
    Ok(TransactionRequest {
        to: spec.token,
        value: U256::ZERO,
        data: call.abi_encode(),
    })
}
