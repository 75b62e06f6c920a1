/// Largest possible sum of per-channel absolute differences for 8-bit RGB
/// (3 x 255). Dividing by this yields the mean fractional channel difference.
pub const MAX_CHANNEL_DIFF_SUM: f64 = 765.0;

/// Top of the normalized difference scale. Reported for shifts with no
/// usable overlap and for shifts pruned against the running best.
pub const DIFF_CEILING: f64 = 1.0;
