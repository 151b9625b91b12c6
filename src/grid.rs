use std::{fmt::Display, ops::Add};

use crate::error::GridError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    Floor,
    Wall,
    ClosedDoor,
    OpenDoor,
}

impl Tile {
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Floor => '.',
            Self::Wall => '#',
            Self::ClosedDoor => '+',
            Self::OpenDoor => '/',
        }
    }

    /// Whether something standing next to this tile could step onto it,
    /// counting closed doors (they open on the first attempt).
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Floor | Self::ClosedDoor | Self::OpenDoor)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector(pub i32, pub i32);

impl Vector {
    pub const fn x(self) -> i32 {
        self.0
    }

    pub const fn y(self) -> i32 {
        self.1
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0, self.1 + other.1)
    }
}

/// Fixed-size tile buffer, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::filled(width, height, Tile::Empty)
    }

    pub fn filled(width: i32, height: i32, fill: Tile) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        #[allow(clippy::cast_sign_loss)]
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            tiles: vec![fill; len],
        })
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn contains(&self, pos: Vector) -> bool {
        pos.0 >= 0 && pos.0 < self.width && pos.1 >= 0 && pos.1 < self.height
    }

    #[allow(clippy::cast_sign_loss)]
    const fn index(&self, pos: Vector) -> Result<usize, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                x: pos.0,
                y: pos.1,
                width: self.width,
                height: self.height,
            });
        }
        Ok((pos.1 * self.width + pos.0) as usize)
    }

    pub fn get(&self, pos: Vector) -> Result<Tile, GridError> {
        let idx = self.index(pos)?;
        Ok(self.tiles[idx])
    }

    pub fn set(&mut self, pos: Vector, tile: Tile) -> Result<(), GridError> {
        let idx = self.index(pos)?;
        self.tiles[idx] = tile;
        Ok(())
    }

    /// Every position holding `tile`, in row-major order.
    pub fn positions_of(&self, tile: Tile) -> Vec<Vector> {
        self.positions()
            .filter(|&pos| self.tiles[self.flat(pos)] == tile)
            .collect()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Vector(x, y)))
    }

    #[allow(clippy::cast_sign_loss)]
    const fn flat(&self, pos: Vector) -> usize {
        (pos.1 * self.width + pos.0) as usize
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.tiles[self.flat(Vector(x, y))].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
