//! Fixed operating constants for the scangate pipeline.
//!
//! These values define the physical and remote contract of the gate
//! station: which relay pin is driven, for how long, how the station
//! identifies itself to the authorization endpoint, and how recovery is
//! paced. They are centralized here so the supervisor, validator, and
//! hardware layers stay in agreement.

use std::time::Duration;

// ============================================================================
// Relay actuation
// ============================================================================

/// Relay pin position on the Raspberry Pi header (physical/board numbering).
///
/// The deployment wiring is documented against the physical header, so this
/// is the number printed on the wiring diagram.
pub const RELAY_HEADER_PIN: u8 = 16;

/// Relay pin in BCM/GPIO numbering.
///
/// Physical header pin 16 carries BCM GPIO 23. The GPIO driver addresses
/// pins by BCM number, so this is the value handed to it.
pub const RELAY_BCM_PIN: u8 = 23;

/// How long the relay pin is held at the active level during a pulse.
///
/// # Value: 100 ms
pub const RELAY_PULSE: Duration = Duration::from_millis(100);

// ============================================================================
// Recovery pacing
// ============================================================================

/// Pause before re-attempting discovery after a session failure.
///
/// Applied when an open device becomes unreadable or a validation request
/// fails; discovery failures themselves retry immediately.
///
/// # Value: 1 second
pub const RECOVER_BACKOFF: Duration = Duration::from_secs(1);

/// Pause between discovery attempts when no device was found.
///
/// # Value: zero (immediate retry)
pub const ACQUIRE_BACKOFF: Duration = Duration::ZERO;

// ============================================================================
// Line framing
// ============================================================================

/// The character that terminates one scanned code.
pub const TERMINATOR: char = '\n';

// ============================================================================
// Validation endpoint defaults
// ============================================================================

/// Default authorization endpoint for scanned codes.
pub const DEFAULT_ENDPOINT: &str = "https://worfact-api.infoart.com.tr/qrcode/scan";

/// Static HTTP Basic credential presented on every validation request.
///
/// The station authenticates with a single embedded credential rather than
/// per-request secrets.
pub const DEFAULT_BASIC_CREDENTIAL: &str = "cXJfY29kZTpoZDJiZnRxazhodWttdWp4MHQyYng=";

/// Response body (after trimming) that grants access.
///
/// Matching is exact and case-sensitive; any other body is a denial.
pub const GRANT_BODY: &str = "true";

/// Default timeout for a single validation request.
///
/// Bounds how long a hung endpoint can stall the pipeline; the original
/// station relied on client defaults, which left this unbounded.
///
/// # Value: 10 seconds
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Station identity defaults
// ============================================================================

/// Default station IP address reported in the validation payload.
pub const DEFAULT_STATION_IP: &str = "127.0.0.1";

/// Default station user id reported in the validation payload.
pub const DEFAULT_STATION_USER_ID: u32 = 552;

/// Default station MAC identifier reported in the validation payload.
pub const DEFAULT_STATION_MAC: &str = "1a:1a:1a:1a:1a";
