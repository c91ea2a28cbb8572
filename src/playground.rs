use rand::Rng;

use crate::coords::Coords;
use crate::error::{GameError, Result};

/// Playable area of `width` x `height` cells, framed by a one-cell wall.
/// The interior spans `1..=width` by `1..=height`; column 0, row 0,
/// column `width + 1` and row `height + 1` are walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playground {
    width: i32,
    height: i32,
}

impl Playground {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidPlayground { width, height });
        }
        Ok(Playground { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_within(&self, point: Coords) -> bool {
        (1..=self.width).contains(&point.x) && (1..=self.height).contains(&point.y)
    }

    pub fn is_wall(&self, point: Coords) -> bool {
        let on_x_edge = point.x == 0 || point.x == self.width + 1;
        let on_y_edge = point.y == 0 || point.y == self.height + 1;

        (on_x_edge && (0..=self.height + 1).contains(&point.y))
            || (on_y_edge && (0..=self.width + 1).contains(&point.x))
    }

    /// Top-left-most interior cell.
    pub fn origin(&self) -> Coords {
        Coords::new(1, 1)
    }

    pub fn wall_cells(&self) -> impl Iterator<Item = Coords> {
        let (w, h) = (self.width, self.height);

        let horizontal = (0..=w + 1).flat_map(move |x| vec![Coords::new(x, 0), Coords::new(x, h + 1)]);
        let vertical = (1..=h).flat_map(move |y| vec![Coords::new(0, y), Coords::new(w + 1, y)]);

        horizontal.chain(vertical)
    }

    pub fn interior_cells(&self) -> impl Iterator<Item = Coords> {
        let (w, h) = (self.width, self.height);
        (1..=h).flat_map(move |y| (1..=w).map(move |x| Coords::new(x, y)))
    }

    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Coords {
        Coords::new(rng.gen_range(1..=self.width), rng.gen_range(1..=self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_reference_bounds() {
        let pg = Playground::new(40, 20).unwrap();

        assert!(!pg.is_within(Coords::new(0, 5)));
        assert!(!pg.is_within(Coords::new(41, 5)));
        assert!(pg.is_wall(Coords::new(0, 5)));
        assert!(pg.is_wall(Coords::new(41, 5)));

        assert!(pg.is_within(Coords::new(1, 1)));
        assert!(pg.is_within(Coords::new(40, 20)));
        assert!(!pg.is_wall(Coords::new(1, 1)));
        assert!(!pg.is_wall(Coords::new(40, 20)));

        assert!(!pg.is_within(Coords::new(5, 21)));
        assert!(pg.is_wall(Coords::new(41, 21)));
        assert!(!pg.is_wall(Coords::new(42, 5)));
    }

    #[test]
    fn test_rejects_empty_dimensions() {
        assert_eq!(Playground::new(0, 5), Err(GameError::InvalidPlayground { width: 0, height: 5 }));
        assert!(Playground::new(5, -1).is_err());
    }

    #[test]
    fn test_wall_cells_frame_interior() {
        let pg = Playground::new(4, 3).unwrap();
        let walls: Vec<Coords> = pg.wall_cells().collect();

        assert_eq!(walls.len(), 2 * (4 + 2) + 2 * 3);
        assert!(walls.iter().all(|p| pg.is_wall(*p) && !pg.is_within(*p)));
        assert_eq!(pg.interior_cells().count(), pg.area());
        assert!(pg.interior_cells().all(|p| pg.is_within(p)));
    }

    #[test]
    fn test_random_point_stays_inside() {
        let pg = Playground::new(3, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            assert!(pg.is_within(pg.random_point(&mut rng)));
        }
    }
}
