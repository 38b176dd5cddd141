//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
///
/// Ensures each factory-created entity gets unique natural keys so that
/// unique constraints never collide between factory calls.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Login id recorded in audit columns of factory-created rows.
pub const FACTORY_ACTOR: &str = "factory@test";
