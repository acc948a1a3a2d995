//! Color name resolution
//!
//! Maps a color name to the single-digit code embedded in the built-in
//! templates (`\x1b[1;3{color}m`). Consulted only when a level is
//! registered; the resolved code is frozen into the [`LevelType`](super::level::LevelType).

/// Code meaning "never render this level with color", regardless of the
/// logger's global color flag.
pub const NO_COLOR: i8 = -1;

/// Resolve a color name to its code.
///
/// The explicit `"no"` sentinel resolves to [`NO_COLOR`]. Unrecognized
/// or empty names resolve to the white entry (7), so `"white"` and an
/// unknown name are indistinguishable after resolution.
pub fn resolve(name: &str) -> i8 {
    match name {
        "no" => NO_COLOR,
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "purple" => 5,
        "cyan" => 6,
        _ => 7,
    }
}
