// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod faulty;
pub mod memory;
pub mod time;

pub use faulty::{FailingStore, RacingProductWrite};
pub use memory::MemoryStore;
pub use time::{FixedClock, fixed_now};

/// Bearer token accepted by the test router.
pub const TEST_TOKEN: &str = "test-admin-token-0001";
