// SPDX-License-Identifier: AGPL-3.0-or-later
//! Log subscriber setup for hosts embedding the editor

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "blockwright=info";

/// Install a formatted subscriber honouring `RUST_LOG`
///
/// Returns false when a global subscriber was already set.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
