use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Earning multiplier assigned to a newly created goal
pub const INITIAL_EARNING_MULTIPLIER: Decimal = dec!(1.0);

/// Factor applied to a goal's earning multiplier on each soft reset
pub const SOFT_RESET_EARNING_FACTOR: Decimal = dec!(0.5);

/// Largest target that gets a single halfway milestone
pub const SINGLE_MILESTONE_TARGET_MAX: i64 = 10;

/// Largest target that gets quartile milestones
pub const QUARTILE_MILESTONE_TARGET_MAX: i64 = 20;

/// Smallest milestone stride for large targets
pub const MIN_MILESTONE_STEP: i64 = 5;
