pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Maximum distance between a clicked point and the node it resolves to.
pub const SNAP_RADIUS_METERS: f64 = 1_000.0;

pub const UNNAMED_STREET: &str = "Unnamed Street";

/// Padding around the first click when requesting a fragment.
pub const FIRST_CLICK_PADDING_DEGREES: f64 = 0.003;

/// Padding around the start/destination pair when requesting a fragment.
pub const ROUTE_PADDING_DEGREES: f64 = 0.008;

pub const MIN_PLAYBACK_SPEED: u8 = 1;
pub const MAX_PLAYBACK_SPEED: u8 = 25;
pub const DEFAULT_PLAYBACK_SPEED: u8 = 5;

/// Exploration playback is sliced into roughly this many batches at speed 1.
pub const EXPLORATION_STEPS: usize = 100;
pub const MIN_EXPLORATION_BATCH: usize = 2;
pub const BASE_EXPLORATION_DELAY_MS: i64 = 30;

pub const TRACE_FRAMES: usize = 45;
pub const TRACE_DELAY_MS: i64 = 10;
