//! Simulation constants and tuning defaults.
//!
//! Values that a session may override live in [`crate::config::Tuning`];
//! the constants here are its defaults plus fixed scene geometry.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Scene geometry (scene units, y grows downward) ---

/// Scene width.
pub const SCENE_WIDTH: f64 = 800.0;

/// Scene height.
pub const SCENE_HEIGHT: f64 = 600.0;

/// Defender platform position.
pub const PLAYER_X: f64 = 400.0;
pub const PLAYER_Y: f64 = 440.0;

/// Vertical offset from the defender at which player projectiles appear.
pub const PLAYER_MUZZLE_OFFSET: f64 = -20.0;

/// Radius around the defender inside which pickups are collected.
pub const PLAYER_COLLECT_RADIUS: f64 = 30.0;

/// Earth center.
pub const EARTH_X: f64 = 400.0;
pub const EARTH_Y: f64 = 560.0;

/// Earth hit box (centered on EARTH_X, EARTH_Y).
pub const EARTH_HITBOX_WIDTH: f64 = 140.0;
pub const EARTH_HITBOX_HEIGHT: f64 = 40.0;

/// Mothership altitude.
pub const MOTHERSHIP_Y: f64 = 50.0;

/// Mothership horizontal sweep range.
pub const MOTHERSHIP_MIN_X: f64 = 150.0;
pub const MOTHERSHIP_MAX_X: f64 = 650.0;

/// Seconds for one leg of the mothership sweep.
pub const MOTHERSHIP_SWEEP_SECS: f64 = 4.0;

// --- Meters ---

pub const EARTH_MAX_HEALTH: f64 = 100.0;
pub const MOTHERSHIP_MAX_HEALTH: f64 = 100.0;
pub const CHARGE_MAX: f64 = 100.0;

// --- Spawning ---

/// Maximum simultaneous enemies.
pub const MAX_ENEMIES: usize = 10;

/// Every Nth spawn is a shield carrier.
pub const SPECIAL_SPAWN_CADENCE: u32 = 8;

/// Seconds between spawn ticks.
pub const SPAWN_INTERVAL_SECS: f64 = 1.5;

/// Altitude at which enemies appear.
pub const SPAWN_Y: f64 = 120.0;

/// Horizontal spawn band.
pub const SPAWN_MIN_X: f64 = 80.0;
pub const SPAWN_MAX_X: f64 = 720.0;

/// Minimum horizontal separation from other near-top enemies.
pub const SPAWN_MIN_SPACING: f64 = 60.0;

/// Enemies above this altitude count as "near the top" for spacing.
pub const SPAWN_SPACING_BAND_Y: f64 = 200.0;

/// Placement attempts before accepting an overlapping position.
pub const SPAWN_PLACEMENT_ATTEMPTS: u32 = 20;

/// Holding altitude range.
pub const HOLD_MIN_Y: f64 = 180.0;
pub const HOLD_MAX_Y: f64 = 300.0;

/// Idle drift amplitude.
pub const DRIFT_MAX_DX: f64 = 20.0;
pub const DRIFT_MAX_DY: f64 = 10.0;

/// Idle drift leg duration range (seconds).
pub const DRIFT_MIN_SECS: f64 = 1.5;
pub const DRIFT_MAX_SECS: f64 = 2.5;

/// Enemies below this altitude are removed without reward.
pub const ENEMY_ESCAPE_Y: f64 = 550.0;

// --- Combat ---

/// Tap tolerance around an enemy center.
pub const TAP_TOLERANCE: f64 = 50.0;

/// Tap radius around the mothership for the mega blast.
pub const MOTHERSHIP_TAP_RADIUS: f64 = 100.0;

/// Player projectile speed.
pub const PLAYER_PROJECTILE_SPEED: f64 = 800.0;

/// Enemy projectile speed.
pub const ENEMY_PROJECTILE_SPEED: f64 = 280.0;

/// Vertical offset below the enemy at which its projectile appears.
pub const ENEMY_MUZZLE_OFFSET: f64 = 15.0;

/// Horizontal jitter of enemy aim around Earth's center.
pub const ENEMY_AIM_JITTER: f64 = 40.0;

/// Distance at which a player projectile hits an enemy.
pub const PROJECTILE_HIT_RADIUS: f64 = 20.0;

/// Secondary targets added by multishot.
pub const MULTISHOT_EXTRA_TARGETS: usize = 2;

/// Player projectiles outside this margin around the scene are discarded.
pub const PROJECTILE_BOUNDS_MARGIN: f64 = 20.0;

/// Enemy projectiles and pickups below this altitude are discarded.
pub const FALL_OUT_Y: f64 = 620.0;

// --- Shield ---

/// Shield hit points equal the carrier's max health.
pub const SHIELD_HIT_POINTS: f64 = 10.0;

// --- Mega blast ---

pub const MEGA_BLAST_DAMAGE: f64 = 25.0;

/// Delay between consuming the charge and damaging the mothership.
pub const MEGA_BLAST_DELAY_SECS: f64 = 0.15;

/// Charge added per power core (25% of max).
pub const CHARGE_PER_CORE: f64 = 25.0;

// --- Power-ups ---

/// Kills needed for a power-up drop.
pub const ENEMIES_PER_POWER_UP: u32 = 15;

pub const MULTISHOT_DURATION_SECS: f64 = 5.0;

pub const HEAL_AMOUNT: f64 = 30.0;

pub const INSTA_KILLS_PER_PICKUP: u32 = 3;

/// Altitude and horizontal band for power-up drops.
pub const POWER_UP_SPAWN_Y: f64 = 100.0;
pub const POWER_UP_MIN_X: f64 = 100.0;
pub const POWER_UP_MAX_X: f64 = 700.0;

/// Delay before a pickup starts drifting toward the defender.
pub const POWER_CORE_ATTRACT_DELAY_SECS: f64 = 0.5;
pub const POWER_UP_ATTRACT_DELAY_SECS: f64 = 0.3;

/// Attraction speeds.
pub const POWER_CORE_ATTRACT_SPEED: f64 = 300.0;
pub const POWER_UP_ATTRACT_SPEED: f64 = 250.0;

/// Delay before an enemy whose shot resolved may fire again.
pub const ENEMY_FIRE_RELEASE_DELAY_SECS: f64 = 0.0;
