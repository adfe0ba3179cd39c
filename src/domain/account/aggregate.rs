//! Account aggregate entity - the installment reconciliation core.
//!
//! An Account tracks one subscriber's position in a chit plan: how many
//! monthly installments have been credited, how many elapsed months were
//! missed, and the running money totals. All mutation goes through
//! `reconcile_missed_months` and `apply_payment`; everything else in the
//! system is glue around these two operations.
//!
//! # Design Decisions
//!
//! - **Plan passed by reference**: the aggregate stores only `plan_id`.
//!   Callers load the plan and pass `&Plan` into the operations, which keeps
//!   the core free of I/O and trivially testable.
//! - **No plan means no obligation**: `plan_id` is `Option`; reconciliation
//!   leaves the pending fields untouched when no plan is assigned rather
//!   than treating a missing plan as a zero-valued one.
//! - **Lazy month accounting**: counters are only brought up to date by an
//!   explicit reconcile call; after one, `months_paid + months_missed`
//!   equals the elapsed whole calendar months since `created_on`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, Money, PlanId, Timestamp, ValidationError};
use crate::domain::plan::Plan;

use super::errors::AccountError;
use super::standing::AccountStanding;

/// Result of one `apply_payment` call.
///
/// Carries the allocation decision and the post-payment counters so the
/// caller can build a ledger record and an HTTP response without re-reading
/// the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    /// Whole installments advanced by this payment.
    pub installments_cleared: u32,

    /// The full tendered amount, all of which was credited to total_paid.
    pub amount_credited: Money,

    /// Sub-installment remainder absorbed into total_paid without advancing
    /// any counter. Always zero when the payment cleared all missed months.
    pub remainder: Money,

    /// months_paid after the payment.
    pub months_paid: u32,

    /// months_missed after the payment.
    pub months_missed: u32,

    /// pending_amount after the payment.
    pub pending_amount: Money,

    /// total_paid after the payment.
    pub total_paid: Money,
}

/// Subscriber account - per-subscriber mutable chit fund state.
///
/// # Invariants
///
/// - `created_on` is set once and never changes
/// - `pending_amount == months_missed * plan.monthly_amount` whenever a
///   plan is assigned and a reconcile or payment has run against it
/// - `total_pending` mirrors `pending_amount` (kept as a separate field
///   for the audit trail)
/// - `total_paid` is cumulative and never decreases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for this account.
    pub id: AccountId,

    /// Subscriber's name. Copied into the Closed lifecycle event, which may
    /// outlive the account row itself.
    pub holder_name: String,

    /// Plan the subscriber pays into, if one has been assigned.
    pub plan_id: Option<PlanId>,

    /// Calendar date the account was opened. Immutable.
    pub created_on: NaiveDate,

    /// Monthly installments credited so far.
    pub months_paid: u32,

    /// Elapsed months with no installment credited, as of the last reconcile.
    pub months_missed: u32,

    /// Money currently owed for all missed months.
    pub pending_amount: Money,

    /// Cumulative sum of all money ever credited.
    pub total_paid: Money,

    /// Mirror of `pending_amount`, retained for audit history.
    pub total_pending: Money,

    /// When the account record was created.
    pub created_at: Timestamp,

    /// When the account record was last updated.
    pub updated_at: Timestamp,
}

impl Account {
    /// Registers a new account, optionally already assigned to a plan.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `holder_name` is empty.
    pub fn register(
        id: AccountId,
        holder_name: impl Into<String>,
        plan_id: Option<PlanId>,
        created_on: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let holder_name = holder_name.into();
        if holder_name.trim().is_empty() {
            return Err(ValidationError::empty_field("holder_name"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            holder_name,
            plan_id,
            created_on,
            months_paid: 0,
            months_missed: 0,
            pending_amount: Money::zero(),
            total_paid: Money::zero(),
            total_pending: Money::zero(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Whole calendar months elapsed between `created_on` and `as_of`.
    ///
    /// Year-month difference only; the day of month is ignored, so crossing
    /// from the 31st of one month to the 1st of the next counts as one
    /// elapsed month. Dates before `created_on` clamp to zero.
    pub fn elapsed_months(&self, as_of: NaiveDate) -> u32 {
        let years = i64::from(as_of.year()) - i64::from(self.created_on.year());
        let months = i64::from(as_of.month()) - i64::from(self.created_on.month());
        (years * 12 + months).max(0) as u32
    }

    /// Recomputes `months_missed` from elapsed time and updates the pending
    /// fields from the assigned plan.
    ///
    /// `months_missed = max(elapsed - months_paid, 0)`. With a plan present,
    /// `pending_amount` and `total_pending` are both set to
    /// `months_missed * monthly_amount`; with no plan the pending fields
    /// keep their prior value, since no obligation can be computed.
    ///
    /// Idempotent for a fixed `as_of` with unchanged `months_paid` and plan.
    pub fn reconcile_missed_months(&mut self, as_of: NaiveDate, plan: Option<&Plan>) -> u32 {
        let elapsed = self.elapsed_months(as_of);
        self.months_missed = elapsed.saturating_sub(self.months_paid);

        if let Some(plan) = plan {
            self.pending_amount = plan.monthly_amount.times(self.months_missed);
            self.total_pending = self.pending_amount;
        }

        self.updated_at = Timestamp::now();
        self.months_missed
    }

    /// Allocates an incoming payment across missed installments.
    ///
    /// Allocation is deterministic, in priority order:
    ///
    /// 1. `amount >= pending_amount`: the payment clears every missed month.
    ///    The entire amount is credited, `months_paid` advances by the full
    ///    missed count, and the pending fields reset to zero. No remainder
    ///    is carried on this branch, even when the amount overshoots the
    ///    pending total.
    /// 2. Otherwise only whole installments advance the counters:
    ///    `floor(amount / monthly_amount)` months move from missed to paid.
    ///    The full tendered amount still lands in `total_paid`; the
    ///    sub-installment fraction is reported as `remainder` and absorbed
    ///    without advancing any counter.
    ///
    /// Payments after plan completion are accepted and banked into
    /// `total_paid` with no special handling.
    ///
    /// # Errors
    ///
    /// Returns `AmountNotPositive` for a zero or negative amount. No state
    /// is mutated on error.
    pub fn apply_payment(
        &mut self,
        amount: Money,
        plan: &Plan,
    ) -> Result<PaymentOutcome, AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::amount_not_positive(amount));
        }

        let installment = plan.monthly_amount;
        let (installments_cleared, remainder) = if amount >= self.pending_amount {
            // Full payoff of every missed month. The whole amount is
            // absorbed; counters reset.
            let cleared = self.months_missed;
            self.total_paid = self.total_paid.plus(amount);
            self.months_paid += cleared;
            self.months_missed = 0;
            self.pending_amount = Money::zero();
            (cleared, Money::zero())
        } else {
            // Partial payment against missed installments. Only whole
            // multiples of the installment advance the counters.
            let covered = amount.whole_installments_of(installment);
            self.total_paid = self.total_paid.plus(amount);
            self.months_paid += covered;
            self.months_missed -= covered;
            self.pending_amount = installment.times(self.months_missed);
            let remainder = amount
                .minus(installment.times(covered))
                .unwrap_or_else(Money::zero);
            (covered, remainder)
        };

        self.total_pending = self.pending_amount;
        self.updated_at = Timestamp::now();

        Ok(PaymentOutcome {
            installments_cleared,
            amount_credited: amount,
            remainder,
            months_paid: self.months_paid,
            months_missed: self.months_missed,
            pending_amount: self.pending_amount,
            total_paid: self.total_paid,
        })
    }

    /// Lump-sum payout released on completing all installments.
    ///
    /// Returns `total_paid + bonus` once `months_paid` equals the plan
    /// duration, and zero before that.
    pub fn final_payout(&self, plan: &Plan) -> Money {
        if self.months_paid == plan.duration_months {
            self.total_paid.plus(plan.bonus_amount)
        } else {
            Money::zero()
        }
    }

    /// Current standing of the account against its plan.
    pub fn standing(&self, plan: Option<&Plan>) -> AccountStanding {
        if let Some(plan) = plan {
            if self.months_paid >= plan.duration_months {
                return AccountStanding::Completed;
            }
        }
        if self.months_missed > 0 {
            AccountStanding::Missing {
                months: self.months_missed,
            }
        } else {
            AccountStanding::Current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PlanId;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn money(d: Decimal) -> Money {
        Money::new(d).unwrap()
    }

    fn standard_plan() -> Plan {
        Plan::new(PlanId::new(), money(dec!(500)), 11, money(dec!(750))).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn account_created(created_on: NaiveDate, plan: &Plan) -> Account {
        Account::register(AccountId::new(), "Meena", Some(plan.id), created_on).unwrap()
    }

    // Registration

    #[test]
    fn register_starts_with_zeroed_counters() {
        let plan = standard_plan();
        let account = account_created(date(2026, 1, 15), &plan);

        assert_eq!(account.months_paid, 0);
        assert_eq!(account.months_missed, 0);
        assert!(account.pending_amount.is_zero());
        assert!(account.total_paid.is_zero());
    }

    #[test]
    fn register_rejects_blank_name() {
        let result = Account::register(AccountId::new(), "   ", None, date(2026, 1, 1));
        assert!(result.is_err());
    }

    // Elapsed month arithmetic

    #[test]
    fn elapsed_months_ignores_day_of_month() {
        let plan = standard_plan();
        let account = account_created(date(2026, 1, 31), &plan);

        // 31st to the 1st of the next month still counts as one month.
        assert_eq!(account.elapsed_months(date(2026, 2, 1)), 1);
    }

    #[test]
    fn elapsed_months_crosses_year_boundary() {
        let plan = standard_plan();
        let account = account_created(date(2025, 11, 10), &plan);

        assert_eq!(account.elapsed_months(date(2026, 2, 10)), 3);
    }

    #[test]
    fn elapsed_months_clamps_before_creation() {
        let plan = standard_plan();
        let account = account_created(date(2026, 5, 1), &plan);

        assert_eq!(account.elapsed_months(date(2026, 3, 1)), 0);
    }

    // Reconciliation

    #[test]
    fn three_unpaid_months_pending_1500() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 2, 10), &plan);

        let missed = account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));

        assert_eq!(missed, 3);
        assert_eq!(account.months_missed, 3);
        assert_eq!(account.pending_amount.amount(), dec!(1500));
        assert_eq!(account.total_pending.amount(), dec!(1500));
    }

    #[test]
    fn reconcile_is_idempotent_for_fixed_date() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 2, 10), &plan);

        account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));
        let first = account.clone();
        account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));

        assert_eq!(account.months_paid, first.months_paid);
        assert_eq!(account.months_missed, first.months_missed);
        assert_eq!(account.pending_amount, first.pending_amount);
        assert_eq!(account.total_paid, first.total_paid);
    }

    #[test]
    fn reconcile_without_plan_keeps_prior_pending() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 2, 10), &plan);
        account.reconcile_missed_months(date(2026, 4, 10), Some(&plan));
        let pending_before = account.pending_amount;

        account.plan_id = None;
        let missed = account.reconcile_missed_months(date(2026, 7, 10), None);

        // Missed count still tracks elapsed time, but no obligation can be
        // computed without a plan.
        assert_eq!(missed, 5);
        assert_eq!(account.pending_amount, pending_before);
    }

    #[test]
    fn reconcile_accounts_for_already_paid_months() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 1, 5), &plan);
        account.months_paid = 2;

        account.reconcile_missed_months(date(2026, 6, 5), Some(&plan));

        assert_eq!(account.months_missed, 3);
        assert_eq!(account.pending_amount.amount(), dec!(1500));
    }

    // Payment allocation: full payoff branch

    #[test]
    fn exact_payment_clears_all_missed_months() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 2, 10), &plan);
        account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));

        let outcome = account.apply_payment(money(dec!(1500)), &plan).unwrap();

        assert_eq!(outcome.installments_cleared, 3);
        assert_eq!(account.months_paid, 3);
        assert_eq!(account.months_missed, 0);
        assert!(account.pending_amount.is_zero());
        assert_eq!(account.total_paid.amount(), dec!(1500));
        assert!(outcome.remainder.is_zero());
    }

    #[test]
    fn overshooting_payment_is_banked_without_remainder() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 2, 10), &plan);
        account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));

        // 1700 covers the 1500 pending; the extra 200 is absorbed into
        // total_paid without carrying a partial-month remainder.
        let outcome = account.apply_payment(money(dec!(1700)), &plan).unwrap();

        assert_eq!(account.months_paid, 3);
        assert_eq!(account.months_missed, 0);
        assert!(account.pending_amount.is_zero());
        assert_eq!(account.total_paid.amount(), dec!(1700));
        assert!(outcome.remainder.is_zero());
    }

    // Payment allocation: partial branch

    #[test]
    fn partial_payment_covers_whole_installments_only() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 2, 10), &plan);
        account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));

        let outcome = account.apply_payment(money(dec!(700)), &plan).unwrap();

        assert_eq!(outcome.installments_cleared, 1);
        assert_eq!(account.months_paid, 1);
        assert_eq!(account.months_missed, 2);
        assert_eq!(account.total_paid.amount(), dec!(700));
        assert_eq!(account.pending_amount.amount(), dec!(1000));
        assert_eq!(outcome.remainder.amount(), dec!(200));
    }

    #[test]
    fn partial_payment_below_one_installment_moves_no_counter() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 2, 10), &plan);
        account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));

        let outcome = account.apply_payment(money(dec!(300)), &plan).unwrap();

        assert_eq!(outcome.installments_cleared, 0);
        assert_eq!(account.months_paid, 0);
        assert_eq!(account.months_missed, 3);
        assert_eq!(account.total_paid.amount(), dec!(300));
        assert_eq!(account.pending_amount.amount(), dec!(1500));
        assert_eq!(outcome.remainder.amount(), dec!(300));
    }

    #[test]
    fn repeated_partial_payments_keep_counters_consistent() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 1, 10), &plan);
        account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));
        assert_eq!(account.months_missed, 4);

        account.apply_payment(money(dec!(700)), &plan).unwrap();
        account.apply_payment(money(dec!(700)), &plan).unwrap();

        assert_eq!(account.months_paid, 2);
        assert_eq!(account.months_missed, 2);
        assert_eq!(account.total_paid.amount(), dec!(1400));
        assert_eq!(account.pending_amount.amount(), dec!(1000));
    }

    // Preconditions

    #[test]
    fn zero_payment_is_rejected_without_mutation() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 2, 10), &plan);
        account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));
        let before = account.clone();

        let result = account.apply_payment(Money::zero(), &plan);

        assert!(matches!(result, Err(AccountError::AmountNotPositive { .. })));
        assert_eq!(account.months_paid, before.months_paid);
        assert_eq!(account.total_paid, before.total_paid);
    }

    // Payout

    #[test]
    fn payout_zero_before_completion() {
        let plan = standard_plan();
        let mut account = account_created(date(2025, 1, 10), &plan);
        account.months_paid = 10;
        account.total_paid = money(dec!(5000));

        assert!(account.final_payout(&plan).is_zero());
    }

    #[test]
    fn payout_is_total_paid_plus_bonus_at_completion() {
        let plan = standard_plan();
        let mut account = account_created(date(2025, 1, 10), &plan);
        account.months_paid = 11;
        account.total_paid = money(dec!(5500));

        assert_eq!(account.final_payout(&plan).amount(), dec!(6250));
    }

    // Standing

    #[test]
    fn standing_transitions_through_lifecycle() {
        let plan = standard_plan();
        let mut account = account_created(date(2026, 2, 10), &plan);

        assert_eq!(account.standing(Some(&plan)), AccountStanding::Current);

        account.reconcile_missed_months(date(2026, 5, 10), Some(&plan));
        assert_eq!(
            account.standing(Some(&plan)),
            AccountStanding::Missing { months: 3 }
        );

        account.apply_payment(money(dec!(1500)), &plan).unwrap();
        assert_eq!(account.standing(Some(&plan)), AccountStanding::Current);

        account.months_paid = 11;
        assert_eq!(account.standing(Some(&plan)), AccountStanding::Completed);
    }

    // Properties

    proptest! {
        /// After any reconcile, paid + missed equals elapsed months, as long
        /// as the account has not been paid ahead of the calendar.
        #[test]
        fn reconcile_balances_counters_against_elapsed(
            months_ahead in 0u32..120,
            prepaid in 0u32..120,
        ) {
            let plan = standard_plan();
            let created = date(2020, 1, 15);
            let mut account = account_created(created, &plan);
            account.months_paid = prepaid.min(months_ahead);

            let as_of = date(
                2020 + ((months_ahead / 12) as i32),
                1 + months_ahead % 12,
                15,
            );
            account.reconcile_missed_months(as_of, Some(&plan));

            prop_assert_eq!(
                account.months_paid + account.months_missed,
                account.elapsed_months(as_of)
            );
            prop_assert_eq!(
                account.pending_amount,
                plan.monthly_amount.times(account.months_missed)
            );
        }

        /// total_paid never decreases and months_missed never increases
        /// across any sequence of valid payments.
        #[test]
        fn payments_are_monotonic(amounts in proptest::collection::vec(1u64..3000, 1..12)) {
            let plan = standard_plan();
            let mut account = account_created(date(2024, 3, 1), &plan);
            account.reconcile_missed_months(date(2025, 3, 1), Some(&plan));

            let mut last_total = account.total_paid;
            let mut last_missed = account.months_missed;

            for units in amounts {
                account.apply_payment(Money::from_units(units), &plan).unwrap();
                prop_assert!(account.total_paid >= last_total);
                prop_assert!(account.months_missed <= last_missed);
                last_total = account.total_paid;
                last_missed = account.months_missed;
            }
        }

        /// Pending amount always equals missed months times the installment
        /// after a payment.
        #[test]
        fn pending_tracks_missed_months(units in 1u64..5000) {
            let plan = standard_plan();
            let mut account = account_created(date(2024, 3, 1), &plan);
            account.reconcile_missed_months(date(2024, 9, 1), Some(&plan));

            account.apply_payment(Money::from_units(units), &plan).unwrap();

            prop_assert_eq!(
                account.pending_amount,
                plan.monthly_amount.times(account.months_missed)
            );
            prop_assert_eq!(account.total_pending, account.pending_amount);
        }
    }
}
