//! Edge compatibility tests between oriented tiles

use crate::spatial::orientation::{EdgeSignature, OrientedTile, Side};

/// Two signatures are compatible iff they are elementwise equal
///
/// No reversal or rotation correction happens here; callers pair the
/// correct sides.
pub fn matches(a: &EdgeSignature, b: &EdgeSignature) -> bool {
    a == b
}

/// Whether `candidate` may sit directly to the right of `left`
pub fn fits_right_of(left: &OrientedTile, candidate: &OrientedTile) -> bool {
    matches(left.edge(Side::Right), candidate.edge(Side::Left))
}

/// Whether `candidate` may sit directly below `above`
pub fn fits_below(above: &OrientedTile, candidate: &OrientedTile) -> bool {
    matches(above.edge(Side::Down), candidate.edge(Side::Up))
}

/// Whether two edges could touch in some relative orientation of their tiles
pub fn shares_edge(a: &EdgeSignature, b: &EdgeSignature) -> bool {
    matches(a, b) || matches(a, &b.reversed())
}
