//! Simulation constants and tuning parameters.

// --- Map geometry ---

/// Fine pixel columns per character column (braille cell width).
pub const PIXELS_PER_COL: usize = 2;

/// Fine pixel rows per character row (braille cell height).
pub const PIXELS_PER_ROW: usize = 4;

/// Base map width in characters.
pub const MAP_COLS: usize = 76;

/// Base map height in characters.
pub const MAP_ROWS: usize = 22;

/// Base map width in fine pixels.
pub const MAP_WIDTH_PX: f64 = (MAP_COLS * PIXELS_PER_COL) as f64;

/// Base map height in fine pixels.
pub const MAP_HEIGHT_PX: f64 = (MAP_ROWS * PIXELS_PER_ROW) as f64;

/// Blank character rows above the map where arc peaks are drawn.
pub const ARC_ROWS: usize = 8;

/// Height of the arc headroom in fine pixels.
pub const ARC_HEADROOM_PX: f64 = (ARC_ROWS * PIXELS_PER_ROW) as f64;

/// Rendered grid height in characters: headroom plus map.
pub const GRID_ROWS: usize = ARC_ROWS + MAP_ROWS;

/// Northern latitude shown on the top edge of the map (degrees).
pub const MAP_NORTH_LAT: f64 = 78.0;

/// Southern latitude shown on the bottom edge of the map (degrees).
pub const MAP_SOUTH_LAT: f64 = -58.0;

/// Western longitude shown on the left edge of the map (degrees).
pub const MAP_WEST_LON: f64 = -180.0;

/// Eastern longitude shown on the right edge of the map (degrees).
pub const MAP_EAST_LON: f64 = 180.0;

// --- Trajectories ---

/// Default arc peak height as a fraction of straight-line distance.
pub const DEFAULT_ARC_HEIGHT: f64 = 0.3;

/// Minimum samples used when rasterizing a full predicted arc.
pub const ARC_MIN_SAMPLES: usize = 16;

/// Maximum samples used when rasterizing a full predicted arc.
pub const ARC_MAX_SAMPLES: usize = 512;

// --- Strike model ---

/// Lethal radius per megaton of yield (km).
pub const KILL_RADIUS_KM_PER_MEGATON: f64 = 8.0;

/// Fallout radius as a multiple of the kill radius.
pub const FALLOUT_MULTIPLIER: f64 = 4.0;

/// Probability a warhead reaches and destroys a city.
pub const PK_CITY: f64 = 0.95;

/// Probability a warhead destroys an industrial site.
pub const PK_INDUSTRIAL: f64 = 0.85;

/// Probability a warhead destroys a hardened military site.
pub const PK_MILITARY: f64 = 0.70;

/// Direct-kill population fraction per megaton.
pub const DIRECT_KILL_FRACTION_PER_MT: f64 = 0.35;

/// Cap on the direct-kill population fraction.
pub const DIRECT_KILL_FRACTION_CAP: f64 = 0.60;

/// Fallout population fraction per megaton.
pub const FALLOUT_FRACTION_PER_MT: f64 = 0.15;

/// Cap on the fallout population fraction.
pub const FALLOUT_FRACTION_CAP: f64 = 0.30;

/// Casualty range for a destroyed non-city target.
pub const NON_CITY_CASUALTIES_MIN: u64 = 2_000;
pub const NON_CITY_CASUALTIES_MAX: u64 = 45_000;

/// Casualty range for a near miss on any target.
pub const NEAR_MISS_CASUALTIES_MIN: u64 = 100;
pub const NEAR_MISS_CASUALTIES_MAX: u64 = 2_500;

/// Fraction of a city's population used by the pre-strike estimate.
pub const ESTIMATE_CITY_FRACTION: f64 = 0.40;

/// Flat pre-strike estimate for a non-city target.
pub const ESTIMATE_NON_CITY: u64 = 25_000;

// --- DEFCON ---

/// Peacetime readiness.
pub const DEFCON_START: u8 = 5;

/// Maximum alert.
pub const DEFCON_MIN: u8 = 1;

/// Target selections allowed before DEFCON starts dropping.
pub const DEFCON_FREE_SELECTIONS: usize = 2;

// --- Escalation ---

/// Missiles per retaliation wave, in launch order.
pub const WAVE_SIZES: [u32; 6] = [1, 2, 3, 4, 5, 6];

/// Frame delay of the first wave (milliseconds).
pub const BASE_FRAME_DELAY_MS: u64 = 80;

/// Multiplicative speed factor applied per wave (< 1 accelerates).
pub const SPEED_DECAY: f64 = 0.8;

/// Progress advanced per frame in the first wave.
pub const BASE_PROGRESS_STEP: f64 = 0.04;

/// Upper bound on the per-frame progress step.
pub const MAX_PROGRESS_STEP: f64 = 0.25;

/// Frames after which in-flight missiles of a wave are forced to impact.
pub const MAX_FRAMES_PER_WAVE: u32 = 120;

/// Lifetime of an explosion animation in frames.
pub const EXPLOSION_FRAMES: u32 = 6;

/// Largest explosion radius in character cells.
pub const EXPLOSION_MAX_RADIUS: usize = 3;
