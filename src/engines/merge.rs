//! Tile-merging engine behind the 2048 puzzle.

use super::{Cell, Direction};
use crate::rng::GameRng;

pub const BOARD_SIZE: i32 = 4;
const FOUR_CHANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile
{
    pub id: u32,
    pub value: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug)]
pub struct MergeEngine
{
    tiles: Vec<Tile>,
    score: u32,
    best_score: u32,
    next_id: u32,
    rng: GameRng,
}

impl MergeEngine
{
    pub fn new(rng: GameRng) -> Self
    {
        let mut engine = Self {
            tiles: Vec::new(),
            score: 0,
            best_score: 0,
            next_id: 0,
            rng,
        };
        engine.reset();
        engine
    }

    /// Starts a new board. The best score survives.
    pub fn reset(&mut self)
    {
        self.tiles.clear();
        self.score = 0;
        self.next_id = 0;
        for _ in 0..2 {
            self.spawn_tile(2);
        }
    }

    pub fn tiles(&self) -> &[Tile]
    {
        &self.tiles
    }

    pub fn score(&self) -> u32
    {
        self.score
    }

    pub fn best_score(&self) -> u32
    {
        self.best_score
    }

    pub fn value_at(&self, x: i32, y: i32) -> Option<u32>
    {
        self.tiles
            .iter()
            .find(|tile| tile.x == x && tile.y == y)
            .map(|tile| tile.value)
    }

    pub fn max_tile(&self) -> u32
    {
        self.tiles.iter().map(|tile| tile.value).max().unwrap_or(0)
    }

    /// Slides every tile toward `direction`, merging equal neighbours once.
    ///
    /// Returns whether anything moved or merged. Only then is a new tile
    /// spawned and the best score refreshed.
    pub fn slide(&mut self, direction: Direction) -> bool
    {
        let size = BOARD_SIZE as usize;
        let mut grid = vec![vec![None::<usize>; size]; size];
        for (index, tile) in self.tiles.iter().enumerate() {
            grid[tile.y as usize][tile.x as usize] = Some(index);
        }

        let mut order: Vec<usize> = (0..self.tiles.len()).collect();
        order.sort_by_key(|&index| distance_to_edge(&self.tiles[index], direction));

        let mut merged = vec![false; self.tiles.len()];
        let mut removed = vec![false; self.tiles.len()];
        let mut changed = false;
        let (dx, dy) = direction.delta();

        for index in order {
            loop {
                let tile = self.tiles[index];
                let next = Cell::new(tile.x + dx, tile.y + dy);
                if !on_board(next) {
                    break;
                }

                match grid[next.y as usize][next.x as usize] {
                    None => {
                        grid[tile.y as usize][tile.x as usize] = None;
                        grid[next.y as usize][next.x as usize] = Some(index);
                        self.tiles[index].x = next.x;
                        self.tiles[index].y = next.y;
                        changed = true;
                    }
                    Some(other) => {
                        let same_value = self.tiles[other].value == tile.value;
                        if same_value && !merged[other] && !merged[index] {
                            self.tiles[other].value *= 2;
                            self.score += self.tiles[other].value;
                            merged[other] = true;
                            merged[index] = true;
                            removed[index] = true;
                            grid[tile.y as usize][tile.x as usize] = None;
                            changed = true;
                        }
                        break;
                    }
                }
            }
        }

        if !changed {
            return false;
        }

        let mut index = 0;
        self.tiles.retain(|_| {
            let keep = !removed[index];
            index += 1;
            keep
        });

        let value = if self.rng.chance(FOUR_CHANCE) { 4 } else { 2 };
        self.spawn_tile(value);
        self.best_score = self.best_score.max(self.score);
        tracing::debug!(?direction, score = self.score, tiles = self.tiles.len(), "tiles slid");
        true
    }

    /// True while an empty cell or an adjacent equal pair remains.
    pub fn has_moves(&self) -> bool
    {
        if self.tiles.len() < (BOARD_SIZE * BOARD_SIZE) as usize {
            return true;
        }
        self.tiles.iter().any(|tile| {
            [Direction::Right, Direction::Down].into_iter().any(|direction| {
                let (dx, dy) = direction.delta();
                self.value_at(tile.x + dx, tile.y + dy) == Some(tile.value)
            })
        })
    }

    fn spawn_tile(&mut self, value: u32)
    {
        let empty: Vec<Cell> = (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell::new(x, y)))
            .filter(|cell| self.value_at(cell.x, cell.y).is_none())
            .collect();
        let Some(cell) = self.rng.pick(&empty) else {
            return;
        };
        let tile = Tile {
            id: self.next_id,
            value,
            x: cell.x,
            y: cell.y,
        };
        tracing::trace!(id = tile.id, value, x = tile.x, y = tile.y, "tile spawned");
        self.tiles.push(tile);
        self.next_id += 1;
    }
}

fn on_board(cell: Cell) -> bool
{
    (0..BOARD_SIZE).contains(&cell.x) && (0..BOARD_SIZE).contains(&cell.y)
}

fn distance_to_edge(tile: &Tile, direction: Direction) -> i32
{
    match direction {
        Direction::Up => tile.y,
        Direction::Down => BOARD_SIZE - 1 - tile.y,
        Direction::Left => tile.x,
        Direction::Right => BOARD_SIZE - 1 - tile.x,
    }
}
