use labyr_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// On an obstacle-free grid this is exactly the cost a search reports.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}
