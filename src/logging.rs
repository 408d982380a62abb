// ============================================================================
// Logging
// Optional tracing subscriber setup (requires the "logging" feature)
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber that prints events up to `level`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
