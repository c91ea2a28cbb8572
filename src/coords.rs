use std::ops::{Add, Mul, Neg};

/// A cell on the terminal grid. Column `x` grows to the right, row `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const fn new(x: i32, y: i32) -> Self {
        Coords { x, y }
    }
}

impl Add for Coords {
    type Output = Coords;

    fn add(self, other: Coords) -> Coords {
        Coords::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<i32> for Coords {
    type Output = Coords;

    fn mul(self, k: i32) -> Coords {
        Coords::new(self.x * k, self.y * k)
    }
}

impl Mul<Coords> for i32 {
    type Output = Coords;

    fn mul(self, p: Coords) -> Coords {
        p * self
    }
}

impl Neg for Coords {
    type Output = Coords;

    fn neg(self) -> Coords {
        self * -1
    }
}
