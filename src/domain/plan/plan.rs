//! Plan aggregate entity.
//!
//! A chit plan defines a subscription tier: a fixed monthly installment, a
//! duration in months, and a flat bonus released on completion. The two
//! derived totals are recomputed on every mutation so they can never be
//! read stale.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, PlanId, Timestamp, ValidationError};

/// Chit plan - a subscription tier definition.
///
/// # Invariants
///
/// - `monthly_amount` is strictly positive
/// - `duration_months` is at least 1
/// - `total_principal == monthly_amount * duration_months`
/// - `total_payout == total_principal + bonus_amount`
///
/// The derived fields are private to this module's mutators: every setter
/// calls `recompute_totals`, so both totals always move together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for this plan.
    pub id: PlanId,

    /// Fixed installment due each month.
    pub monthly_amount: Money,

    /// Number of monthly installments in the scheme.
    pub duration_months: u32,

    /// Flat bonus paid out on top of the principal at completion.
    pub bonus_amount: Money,

    /// Derived: monthly_amount * duration_months.
    pub total_principal: Money,

    /// Derived: total_principal + bonus_amount.
    pub total_payout: Money,

    /// When the plan was created.
    pub created_at: Timestamp,

    /// When the plan was last updated.
    pub updated_at: Timestamp,
}

impl Plan {
    /// Creates a new plan with derived totals computed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `monthly_amount` is not positive or
    /// `duration_months` is zero.
    pub fn new(
        id: PlanId,
        monthly_amount: Money,
        duration_months: u32,
        bonus_amount: Money,
    ) -> Result<Self, ValidationError> {
        if !monthly_amount.is_positive() {
            return Err(ValidationError::below_minimum(
                "monthly_amount",
                "a positive amount",
                monthly_amount.to_string(),
            ));
        }
        if duration_months == 0 {
            return Err(ValidationError::below_minimum(
                "duration_months",
                "1",
                "0",
            ));
        }

        let now = Timestamp::now();
        let mut plan = Self {
            id,
            monthly_amount,
            duration_months,
            bonus_amount,
            total_principal: Money::zero(),
            total_payout: Money::zero(),
            created_at: now,
            updated_at: now,
        };
        plan.recompute_totals();
        Ok(plan)
    }

    /// Changes the monthly installment, keeping derived totals in sync.
    pub fn set_monthly_amount(&mut self, monthly_amount: Money) -> Result<(), ValidationError> {
        if !monthly_amount.is_positive() {
            return Err(ValidationError::below_minimum(
                "monthly_amount",
                "a positive amount",
                monthly_amount.to_string(),
            ));
        }
        self.monthly_amount = monthly_amount;
        self.recompute_totals();
        Ok(())
    }

    /// Changes the duration, keeping derived totals in sync.
    pub fn set_duration_months(&mut self, duration_months: u32) -> Result<(), ValidationError> {
        if duration_months == 0 {
            return Err(ValidationError::below_minimum("duration_months", "1", "0"));
        }
        self.duration_months = duration_months;
        self.recompute_totals();
        Ok(())
    }

    /// Changes the completion bonus, keeping derived totals in sync.
    pub fn set_bonus_amount(&mut self, bonus_amount: Money) {
        self.bonus_amount = bonus_amount;
        self.recompute_totals();
    }

    /// Recomputes both derived totals from the three inputs.
    ///
    /// Pure function of monthly_amount, duration_months, and bonus_amount.
    fn recompute_totals(&mut self) {
        self.total_principal = self.monthly_amount.times(self.duration_months);
        self.total_payout = self.total_principal.plus(self.bonus_amount);
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(d: rust_decimal::Decimal) -> Money {
        Money::new(d).unwrap()
    }

    #[test]
    fn new_plan_computes_derived_totals() {
        let plan = Plan::new(PlanId::new(), money(dec!(500)), 11, money(dec!(750))).unwrap();

        assert_eq!(plan.total_principal.amount(), dec!(5500));
        assert_eq!(plan.total_payout.amount(), dec!(6250));
    }

    #[test]
    fn rejects_zero_monthly_amount() {
        let result = Plan::new(PlanId::new(), Money::zero(), 11, money(dec!(750)));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_duration() {
        let result = Plan::new(PlanId::new(), money(dec!(500)), 0, Money::zero());
        assert!(result.is_err());
    }

    #[test]
    fn changing_monthly_amount_recomputes_both_totals() {
        let mut plan = Plan::new(PlanId::new(), money(dec!(500)), 11, money(dec!(750))).unwrap();

        plan.set_monthly_amount(money(dec!(1000))).unwrap();

        assert_eq!(plan.total_principal.amount(), dec!(11000));
        assert_eq!(plan.total_payout.amount(), dec!(11750));
    }

    #[test]
    fn changing_duration_recomputes_both_totals() {
        let mut plan = Plan::new(PlanId::new(), money(dec!(500)), 11, money(dec!(750))).unwrap();

        plan.set_duration_months(12).unwrap();

        assert_eq!(plan.total_principal.amount(), dec!(6000));
        assert_eq!(plan.total_payout.amount(), dec!(6750));
    }

    #[test]
    fn changing_bonus_recomputes_payout_only() {
        let mut plan = Plan::new(PlanId::new(), money(dec!(500)), 11, money(dec!(750))).unwrap();

        plan.set_bonus_amount(money(dec!(1000)));

        assert_eq!(plan.total_principal.amount(), dec!(5500));
        assert_eq!(plan.total_payout.amount(), dec!(6500));
    }
}
