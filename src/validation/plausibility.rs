//! Sanity checks that reject fixes from badly behaved receivers

use crate::core::Position;

/// True if the fix cannot be trusted no matter how recent it is.
///
/// A reported accuracy radius above `max_accuracy_m`, or coordinates outside
/// the geodetic ranges, mark the fix implausible. NaN coordinates fall
/// outside every range.
pub fn is_implausible(position: &Position, max_accuracy_m: f64) -> bool {
    let too_inaccurate = position.accuracy.map_or(false, |accuracy| accuracy > max_accuracy_m);
    let bad_latitude = !(-90.0..=90.0).contains(&position.latitude);
    let bad_longitude = !(-180.0..=180.0).contains(&position.longitude);

    too_inaccurate || bad_latitude || bad_longitude
}
