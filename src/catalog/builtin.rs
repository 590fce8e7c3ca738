//! Stage layouts shipped with the game.

use super::stage::{Stage, StageId};
use crate::error::CatalogError;

const BOX_SEATS: &str = "
..........
..........
.......B..
..........
..........
..........
..........
..A.......
..........
..........
";

const DOUBLE_GEMINI: &str = "
@@@@@@@@.@@@@@@@@
@@@@@@@...@@@@@@@
@@@@@@.....@@@@@@
@@@@@.......@@@@@
@@@@.........@@@@
@@@.....B.....@@@
@@.............@@
@...............@
.................
@...............@
@@.............@@
@@@...........@@@
@@@@.........@@@@
@@@...........@@@
@@.............@@
@...............@
.................
@...............@
@@.............@@
@@@.....A.....@@@
@@@@.........@@@@
@@@@@.......@@@@@
@@@@@@.....@@@@@@
@@@@@@@...@@@@@@@
@@@@@@@@.@@@@@@@@
";

const LAKEFRONT_PROPERTY: &str = "
................
................
................
............B...
................
................
......@@@@......
......@@@@......
......@@@@......
......@@@@......
................
................
...A............
................
................
................
";

const MAIN_STREET: &str = "
.........
.........
.........
....B....
.........
.........
.........
.........
.........
.........
.........
.........
.........
.........
.........
.........
.........
.........
.........
.........
.........
.........
....A....
.........
.........
.........
";

const RIVER_DRIFT: &str = "
@@@@@............
@@@@@............
@@@@@............
@@@@@........B...
@@@@@............
@@@@@............
@@@@@............
@@@@@.......@@@@@
@@@@@.......@@@@@
@@@@@.......@@@@@
@@@@@.......@@@@@
@@@@@.......@@@@@
@@@@@.......@@@@@
@@@@@.......@@@@@
@@@@@.......@@@@@
@@@@@.......@@@@@
@@@@@.......@@@@@
@@@@@.......@@@@@
............@@@@@
............@@@@@
............@@@@@
...A........@@@@@
............@@@@@
............@@@@@
............@@@@@
";

const SQUARE_SQUARED: &str = "
...............
...............
...............
...........B...
...............
...............
...............
...............
...............
...............
...............
...A...........
...............
...............
...............
";

const THUNDER_POINT: &str = "
@@@@@@@@........
@@@@@@@@........
@@@@@@@@........
@@@@@@@@....B...
@@@@@@@@........
@@@@@@@@........
@@@@@@@@........
................
................
................
................
................
................
................
................
........@@@@@@@@
........@@@@@@@@
........@@@@@@@@
...A....@@@@@@@@
........@@@@@@@@
........@@@@@@@@
........@@@@@@@@
";

const X_MARKS_THE_GARDEN: &str = "
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
@@@@@@...B...@@@@@@
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
...................
...................
...................
...................
...................
...................
...................
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
@@@@@@...A...@@@@@@
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
@@@@@@.......@@@@@@
";

/// `(id, name, layout)` for every built-in stage.
const STAGES: [(u32, &str, &str); 8] = [
    (0, "BoxSeats", BOX_SEATS),
    (1, "DoubleGemini", DOUBLE_GEMINI),
    (2, "LakefrontProperty", LAKEFRONT_PROPERTY),
    (3, "MainStreet", MAIN_STREET),
    (4, "RiverDrift", RIVER_DRIFT),
    (5, "SquareSquared", SQUARE_SQUARED),
    (6, "ThunderPoint", THUNDER_POINT),
    (7, "XMarksTheGarden", X_MARKS_THE_GARDEN),
];

/// Parse every built-in stage.
pub fn standard_stages() -> Result<Vec<Stage>, CatalogError> {
    STAGES
        .iter()
        .map(|&(id, name, text)| Stage::parse(StageId::new(id), name, text))
        .collect()
}
