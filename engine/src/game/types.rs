pub const TILE_SIZE: i32 = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn stepped(&self, direction: Direction) -> Point {
        match direction {
            Direction::Up => Point::new(self.x, self.y - TILE_SIZE),
            Direction::Down => Point::new(self.x, self.y + TILE_SIZE),
            Direction::Left => Point::new(self.x - TILE_SIZE, self.y),
            Direction::Right => Point::new(self.x + TILE_SIZE, self.y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
    pub const DARK_GREEN: Rgb = Rgb::new(0, 50, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
