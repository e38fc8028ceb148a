pub mod clicker;
pub mod merge;
pub mod snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell
{
    pub x: i32,
    pub y: i32,
}

impl Cell
{
    pub const fn new(x: i32, y: i32) -> Self
    {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction
{
    Up,
    Down,
    Left,
    Right,
}

impl Direction
{
    pub fn opposite(self) -> Direction
    {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step; y grows downwards.
    pub fn delta(self) -> (i32, i32)
    {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
