//! Region names, color names, and the adjacency matrix.

/// Number of regions on the map.
pub const REGION_COUNT: usize = 13;

/// Largest usable color budget. With 13 regions, more than 13 colors
/// can never be needed.
pub const MAX_COLORS: usize = 13;

/// Region names in index order. A state assigns `state[i]` as the color
/// of `REGION_NAMES[i]`.
pub const REGION_NAMES: [&str; REGION_COUNT] = [
    "BC", "AB", "SK", "MB", "ON", "QC", "NB", "NS", "PEI", "NL", "NU", "NT", "YT",
];

/// Display names for colors, indexed by color value. Presentation only;
/// the search itself is colorblind to names.
pub const COLOR_NAMES: [&str; MAX_COLORS] = [
    "blue",
    "orange",
    "red",
    "jungle",
    "yellow",
    "green",
    "purple",
    "indigo",
    "turquoise",
    "cyan",
    "maroon",
    "lime",
    "onyx",
];

/// Symmetric adjacency matrix over regions, encoding real-world borders.
/// Diagonal entries are set but never consulted; the evaluator reads
/// only the strict upper triangle.
const ADJACENT: [[u8; REGION_COUNT]; REGION_COUNT] = [
    [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0],
    [0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0],
    [1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
];

/// Whether two regions share a border.
pub fn adjacent(r: usize, c: usize) -> bool {
    ADJACENT[r][c] == 1
}

/// Iterates over all adjacent region pairs `(r, c)` with `r < c`.
///
/// Each border appears exactly once; this is the pair set both the
/// heuristic and the cost are defined over.
pub fn adjacent_pairs() -> impl Iterator<Item = (usize, usize)> {
    (0..REGION_COUNT)
        .flat_map(|r| (r + 1..REGION_COUNT).map(move |c| (r, c)))
        .filter(|&(r, c)| adjacent(r, c))
}
