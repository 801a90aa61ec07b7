// Shared timing/visual/audio tuning constants used by the web frontend.

// Stage timing
pub const DECRYPT_HOLD_MS: i32 = 10_000; // decrypting -> revealing delay
pub const OVERLAY_EXIT_MS: i32 = 1_000; // outgoing block exit animation length

// Audio fade-in ramp
pub const AUDIO_TARGET_VOLUME: f32 = 0.3;
pub const AUDIO_FADE_MS: i32 = 3_000;
pub const AUDIO_FADE_STEPS: u32 = 30;
pub const AUDIO_FADE_STEP_MS: i32 = AUDIO_FADE_MS / AUDIO_FADE_STEPS as i32;

// Decrypting overlay
pub const SCRAMBLE_INTERVAL_MS: i32 = 60;
pub const TARGET_PHRASE: &str = "THE ENCRYPTED TRUTH";
pub const GLITCH_CHARS: &str =
    "█▓▒░ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!?@#$%^&*()_+-=[]{}|;:<>,./";

// Revealing overlay
pub const REVEAL_STAGGER_SEC: f32 = 0.08; // per-letter animation offset

// Starfield
pub const STAR_COUNT: usize = 15_000;
pub const STAR_RADIUS: f32 = 5.0;
pub const STAR_ROT_X_PER_SEC: f32 = -1.0 / 20.0; // radians per second
pub const STAR_ROT_Y_PER_SEC: f32 = -1.0 / 30.0;
pub const STAR_BASE_SCALE: f32 = 1.0;
pub const STAR_REVEAL_SCALE: f32 = 1.5;
pub const STAR_SCALE_EASE: f32 = 0.05; // per-frame smoothing factor
pub const STAR_COLOR: [f32; 3] = [1.0, 0.266, 0.266]; // #ff4444
pub const STAR_POINT_SIZE: f32 = 0.01; // world units, half extent

// Confetti burst
pub const BURST_COUNT: usize = 500;
pub const BURST_RADIUS: f32 = 1.0;
pub const BURST_GROWTH_PER_SEC: f32 = 2.0;
pub const BURST_OPACITY_EASE: f32 = 0.02; // per-frame smoothing factor
pub const BURST_POINT_SIZE: f32 = 0.05;
pub const BURST_PALETTE: [[f32; 3]; 3] = [
    [1.0, 0.843, 0.0],   // gold
    [1.0, 0.0, 0.0],     // red
    [0.545, 0.0, 0.0],   // dark red
];

// Camera
pub const CAMERA_Z: f32 = 7.0;
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_3; // 60 degrees

// Post-processing
pub const BLOOM_THRESHOLD: f32 = 0.1;
pub const BLOOM_STRENGTH: f32 = 1.2;
pub const BG_REVEAL_FADE_SEC: f32 = 5.0; // background gradient crossfade
