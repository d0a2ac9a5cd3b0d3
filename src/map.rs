//! Text map descriptions.
//!
//! A map is plain text: one row per line, one tile per character.
//!
//! | Char | Spawns                    |
//! |------|---------------------------|
//! | `p`  | the player (exactly one)  |
//! | `e`  | an enemy                  |
//! | `s`  | a stone obstacle          |
//! | `w`  | a wall obstacle           |
//!
//! Every cell, whatever its character, also gets a ground tile underneath.
//! [`parse_map`] turns the text into a list of [`Placement`]s in row-major
//! order; spawning them is up to [`crate::game::spawn_map`].

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading a map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map has no player spawn ('p')")]
    MissingPlayer,

    #[error(
        "map has more than one player spawn: column {first_column} row {first_row}, and column {column} row {row}"
    )]
    MultiplePlayers {
        first_column: i32,
        first_row: i32,
        column: i32,
        row: i32,
    },

    #[error("failed to read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a placement spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Ground,
    Player,
    Enemy,
    Stone,
    Wall,
}

impl TileKind {
    /// Entity spawned by a map character on top of the ground tile.
    pub fn from_marker(c: char) -> Option<TileKind> {
        match c {
            'p' => Some(TileKind::Player),
            'e' => Some(TileKind::Enemy),
            's' => Some(TileKind::Stone),
            'w' => Some(TileKind::Wall),
            _ => None,
        }
    }
}

/// One entity to spawn at a map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: i32,
    pub row: i32,
    pub kind: TileKind,
}

/// Parse a map description into placements.
///
/// Each cell yields a [`TileKind::Ground`] placement, followed by the
/// marker's placement when the character is one. Fails unless the map holds
/// exactly one player.
pub fn parse_map(text: &str) -> Result<Vec<Placement>, MapError> {
    let mut placements = Vec::new();
    let mut player: Option<(i32, i32)> = None;

    for (row, line) in text.lines().enumerate() {
        let row = row as i32;
        for (column, c) in line.chars().enumerate() {
            let column = column as i32;
            placements.push(Placement {
                column,
                row,
                kind: TileKind::Ground,
            });
            let Some(kind) = TileKind::from_marker(c) else {
                continue;
            };
            if kind == TileKind::Player {
                if let Some((first_column, first_row)) = player {
                    return Err(MapError::MultiplePlayers {
                        first_column,
                        first_row,
                        column,
                        row,
                    });
                }
                player = Some((column, row));
            }
            placements.push(Placement { column, row, kind });
        }
    }

    if player.is_none() {
        return Err(MapError::MissingPlayer);
    }
    Ok(placements)
}

/// Read and parse a map file.
pub fn load_map(path: impl AsRef<Path>) -> Result<Vec<Placement>, MapError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map(&text)
}
