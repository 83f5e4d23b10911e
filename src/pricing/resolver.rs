use super::tiers::{TierBracket, TierKey, INCLUDED_INVOICES, INVOICE_TIERS, MOVEMENT_TIERS};

/// Invoice bracket for a monthly invoice count, `None` within the included allowance.
pub fn invoice_tier_key(invoices: u32) -> Option<TierKey> {
    if invoices <= INCLUDED_INVOICES {
        return None;
    }
    resolve(&INVOICE_TIERS, invoices)
}

/// Bank movement bracket for a monthly movement count, `None` when there are none.
pub fn movement_tier_key(movements: u32) -> Option<TierKey> {
    if movements == 0 {
        return None;
    }
    resolve(&MOVEMENT_TIERS, movements)
}

// Upper bounds are inclusive; anything past the last bound stays in the top bracket.
fn resolve(table: &[TierBracket], value: u32) -> Option<TierKey> {
    table
        .iter()
        .find(|bracket| value <= bracket.upper)
        .or_else(|| table.last())
        .map(|bracket| bracket.key)
}
