//! Constants

/// DDS core clock frequency.
/// The DDS-60 runs a 30 MHz crystal oscillator through the AD9851's
/// 6x REFCLK multiplier. The exact value drifts board to board; tune
/// it against a frequency counter if the output has to be accurate.
pub const REF_CLOCK_HZ: u32 = 180_000_000;

/// Phase accumulator span, 2^32.
/// One tune word step changes the output by REF_CLOCK_HZ / 2^32 Hz.
pub const PHASE_ACC_SPAN: u64 = 1 << 32;

/// Tune word width, bits W0..W31 of the serial frame
pub const TUNE_WORD_BITS: u32 = 32;

/// Control byte width, bits W32..W39 of the serial frame
pub const CONTROL_BITS: u32 = 8;
