use cosmwasm_std::{Decimal, StdError, StdResult, Uint128};

/// Splits `total` in two: `percentage` of it (rounded down) and the remainder.
/// `percentage` is a ratio, `Decimal::one()` being 100%
pub fn split_by_percentage(total: Uint128, percentage: Decimal) -> StdResult<(Uint128, Uint128)> {
    if !less_or_equal_one(&percentage) {
        return Err(StdError::generic_err(
            "percentage should be less or equal to one",
        ));
    }

    let first = total.multiply_ratio(percentage.atomics(), Decimal::one().atomics());
    let second = total.checked_sub(first)?;

    Ok((first, second))
}

pub fn less_or_equal_one(value: &Decimal) -> bool {
    *value <= Decimal::one()
}
