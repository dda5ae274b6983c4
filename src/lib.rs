mod generator;

pub use generator::*;

use lazy_static::lazy_static;

lazy_static! {
    static ref PROCESS_GENERATOR: RequestIdGenerator = RequestIdGenerator::new();
}

/// Next process-wide request id, starting from 1.
///
/// 0 is never returned, leaving it free as a "no id assigned" marker
/// for callers that need one.
pub fn next_request_id() -> u64 {
    PROCESS_GENERATOR.next_id()
}
