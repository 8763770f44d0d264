//! Process-wide allocation limits, parsed once from the bundled JSON.
use once_cell::sync::Lazy;
use room_allocation_core::AllocationConfig;

static ALLOCATION_CONFIG: Lazy<AllocationConfig> = Lazy::new(AllocationConfig::load_from_static);

#[must_use]
pub fn allocation_config() -> &'static AllocationConfig {
    &ALLOCATION_CONFIG
}
