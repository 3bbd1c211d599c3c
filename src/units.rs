/// Convert milliseconds to seconds.
pub fn ms_to_seconds(duration: f64) -> f64 {
    duration / 1000.0
}
