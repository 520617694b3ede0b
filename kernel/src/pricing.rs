//! Pricing of a requested interval against a field's rate card. Pure: the
//! same inputs always produce the same breakdown.

use crate::interval::duration_minutes;
use crate::model::field::Field;
use chrono::NaiveTime;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub extra_time_fee: Decimal,
    pub total: Decimal,
    /// Requested duration, extended by the extra-time length when the addon
    /// applies.
    pub duration_minutes: i64,
}

/// Computes the price for [start, end) on the given field. The extra-time
/// addon is a flat fee, not prorated; when the field disallows extra time
/// the flag is silently ignored and the breakdown carries a zero fee.
pub fn calculate_price(
    field: &Field,
    start: NaiveTime,
    end: NaiveTime,
    include_extra_time: bool,
    extra_time_minutes: u32,
) -> AppResult<PriceBreakdown> {
    let minutes = duration_minutes(start, end)?;

    let base_price = round_money(field.hourly_rate * Decimal::from(minutes) / Decimal::from(60));

    let (extra_time_fee, duration) = if include_extra_time && field.allows_extra_time {
        let fee = round_money(field.extra_time_rate.unwrap_or(Decimal::ZERO));
        (fee, minutes + i64::from(extra_time_minutes))
    } else {
        (Decimal::ZERO, minutes)
    };

    Ok(PriceBreakdown {
        base_price,
        extra_time_fee,
        total: round_money(base_price + extra_time_fee),
        duration_minutes: duration,
    })
}

/// Price of a single slot of the given length at an hourly rate.
pub fn slot_price(hourly_rate: Decimal, slot_minutes: u32) -> Decimal {
    round_money(hourly_rate * Decimal::from(slot_minutes) / Decimal::from(60))
}

// Monetary amounts are rounded half-up to 2 decimal places.
fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::FieldId;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn field(hourly_rate: Decimal, extra_time_rate: Option<Decimal>, allows: bool) -> Field {
        Field {
            id: FieldId::new(),
            field_name: "Court A".into(),
            owner: "Acme Sports".into(),
            hourly_rate,
            extra_time_rate,
            allows_extra_time: allows,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn base_price_with_extra_time_addon() {
        let field = field(dec!(100), Some(dec!(20)), true);
        let breakdown = calculate_price(&field, t(9, 0), t(10, 0), true, 30).unwrap();
        assert_eq!(breakdown.base_price, dec!(100.00));
        assert_eq!(breakdown.extra_time_fee, dec!(20.00));
        assert_eq!(breakdown.total, dec!(120.00));
        assert_eq!(breakdown.duration_minutes, 90);
    }

    #[test]
    fn fractional_hours_are_allowed() {
        let field = field(dec!(100), None, false);
        let breakdown = calculate_price(&field, t(9, 0), t(10, 30), false, 30).unwrap();
        assert_eq!(breakdown.base_price, dec!(150.00));
        assert_eq!(breakdown.total, dec!(150.00));
        assert_eq!(breakdown.duration_minutes, 90);
    }

    #[test]
    fn extra_time_is_ignored_when_field_disallows_it() {
        let field = field(dec!(100), Some(dec!(20)), false);
        let breakdown = calculate_price(&field, t(9, 0), t(10, 0), true, 30).unwrap();
        assert_eq!(breakdown.extra_time_fee, dec!(0));
        assert_eq!(breakdown.total, dec!(100.00));
        assert_eq!(breakdown.duration_minutes, 60);
    }

    #[test]
    fn amounts_round_half_up_to_two_decimals() {
        // 33.33/h for 50 minutes = 27.775 -> 27.78
        let field = field(dec!(33.33), None, false);
        let breakdown = calculate_price(&field, t(9, 0), t(9, 50), false, 30).unwrap();
        assert_eq!(breakdown.base_price, dec!(27.78));
    }

    #[test]
    fn pricing_is_idempotent() {
        let field = field(dec!(80.50), Some(dec!(15)), true);
        let a = calculate_price(&field, t(14, 0), t(16, 0), true, 30).unwrap();
        let b = calculate_price(&field, t(14, 0), t(16, 0), true, 30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_inverted_interval() {
        let field = field(dec!(100), None, false);
        assert!(calculate_price(&field, t(10, 0), t(9, 0), false, 30).is_err());
    }

    #[test]
    fn slot_price_scales_to_slot_length() {
        assert_eq!(slot_price(dec!(100), 60), dec!(100.00));
        assert_eq!(slot_price(dec!(100), 30), dec!(50.00));
    }
}
