//! Static ASCII world map.
//!
//! Equirectangular, 180°W–180°E by 78°N–58°S, one character per
//! `PIXELS_PER_COL` × `PIXELS_PER_ROW` pixels. Land is drawn with `:`.
//! The rendered grid puts `ARC_ROWS` blank rows above the map.

use wopr_core::constants::{ARC_ROWS, GRID_ROWS, MAP_COLS, MAP_ROWS};

pub const TITLE: &str = "GLOBAL THERMONUCLEAR WAR";

#[rustfmt::skip]
pub const BASE_MAP: [&str; MAP_ROWS] = [
    "               ::::::::::: :::::::       :       ::      ::::               ",
    "   ::::::::::::::::::::   ::::::::       :::::::::::::::::::::::::::::::::::",
    "    ::::::::::::::  ::      :::: ::   ::::::::::::::::::::::::::::::::::::::",
    "          ::::::::  ::::::          :: :::::::::::::::::::::::::::::::::::::",
    "           :::::::::::::::           ::::::::::::::::::::::::::::::::::     ",
    "           ::::::::::::::           ::::::::  :::::::::::::::::::: ::       ",
    "           ::::::::::::             ::  : ::::::::::::::::::::: : ::        ",
    "            ::::::::::              :::::::::::::::::: ::::::::::           ",
    "             ::::::  :            ::::::::::::::::  ::::  ::::::            ",
    "               :::::              :::::::::::::::    :::   :::              ",
    "                  :::             ::::::::::::::      ::   :::  :           ",
    "                    :::::::         ::::::::::::       :   ::               ",
    "                    :::::::::          ::::::::            :: ::            ",
    "                     ::::::::::         :::::::                   :::       ",
    "                     ::::::::::         :::::::                :::          ",
    "                      ::::::::          ::::::::              :::::::       ",
    "                      :::::::           :::::: :             :::::::::      ",
    "                       :::::             ::::                :::::::::      ",
    "                       ::::                                     ::::        ",
    "                       :::                                         :     :: ",
    "                       ::                                                :  ",
    "                       :                                                    ",
];

/// The built-in map as a `GRID_ROWS` × `MAP_COLS` character grid.
pub fn base_grid() -> Vec<Vec<char>> {
    grid_from_lines(&BASE_MAP)
}

/// Headroom rows followed by `lines`, each padded or cut to `MAP_COLS`.
/// Extra lines past `MAP_ROWS` are ignored; missing ones are blank.
pub fn grid_from_lines(lines: &[&str]) -> Vec<Vec<char>> {
    let mut grid = vec![vec![' '; MAP_COLS]; ARC_ROWS];
    for row in 0..MAP_ROWS {
        let mut chars: Vec<char> = lines
            .get(row)
            .map(|line| line.chars().take(MAP_COLS).collect())
            .unwrap_or_default();
        chars.resize(MAP_COLS, ' ');
        grid.push(chars);
    }
    debug_assert_eq!(grid.len(), GRID_ROWS);
    grid
}

/// Title banner framed to the map width.
pub fn banner() -> String {
    let rule = "=".repeat(MAP_COLS);
    let pad = MAP_COLS.saturating_sub(TITLE.len()) / 2;
    format!("{rule}\n{}{TITLE}\n{rule}", " ".repeat(pad))
}
