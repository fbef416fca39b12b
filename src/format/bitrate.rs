const BITRATE_UNITS: [&str; 3] = [" Kbps", " Mbps", " Gbps"];
const MIN_DISPLAY_VALUE: f64 = 0.1;

/// Renders a bitrate as a one-decimal string with a Kbps/Mbps/Gbps suffix.
///
/// Always divides at least once, then keeps dividing by 1024 while the value
/// is strictly greater than 1024. An exact 1024 * 1024 therefore stays in Kbps.
/// Values beyond the Gbps range are reported in Gbps. Halves round up.
pub fn readable_bitrate(bitrate: u64) -> String {
    let mut value = bitrate as f64 / 1024.0;
    let mut unit = 0;

    while value > 1024.0 && unit + 1 < BITRATE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    // `{:.1}` alone rounds exact halves to even
    let rounded = (value.max(MIN_DISPLAY_VALUE) * 10.0).round() / 10.0;
    format!("{:.1}{}", rounded, BITRATE_UNITS[unit])
}
