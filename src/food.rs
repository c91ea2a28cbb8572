use std::collections::HashMap;

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, warn};

use crate::coords::Coords;
use crate::playground::Playground;
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodKind {
    pub score: u32,
    pub symbol: char,
}

pub const FOOD_KINDS: [FoodKind; 3] = [
    FoodKind { score: 1, symbol: '*' },
    FoodKind { score: 2, symbol: '$' },
    FoodKind { score: 3, symbol: '#' },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Coords,
    kind: FoodKind,
}

impl Food {
    pub fn new(position: Coords, kind: FoodKind) -> Self {
        Food { position, kind }
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.kind.score
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol
    }
}

/// All food currently on the board, keyed by where it lies.
#[derive(Debug, Clone, Default)]
pub struct FoodMap {
    items: HashMap<Coords, Food>,
}

impl FoodMap {
    pub fn new() -> Self {
        FoodMap::default()
    }

    /// Places `food`, replacing whatever was at the same cell.
    pub fn insert(&mut self, food: Food) -> Option<Food> {
        self.items.insert(food.position(), food)
    }

    pub fn remove(&mut self, point: Coords) -> Option<Food> {
        self.items.remove(&point)
    }

    pub fn contains(&self, point: Coords) -> bool {
        self.items.contains_key(&point)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Coords> + '_ {
        self.items.keys().copied()
    }
}

/// Picks a free interior cell and a random food kind for it.
///
/// Draws random cells until one is neither snake nor food. After
/// `attempt_cap` misses it falls back to choosing among the free cells
/// directly, and returns `None` only when the board has no free cell left.
/// Snake and food never overlap, so a full count means a full board.
pub fn generate_random_food<R: Rng + ?Sized>(
    playground: &Playground,
    snake: &Snake,
    food: &FoodMap,
    rng: &mut R,
    attempt_cap: usize,
) -> Option<Food> {
    if snake.len() + food.len() >= playground.area() {
        return None;
    }

    let is_free = |p: Coords| !snake.has_body_element_at(p) && !food.contains(p);

    let sampled = (0..attempt_cap)
        .map(|_| playground.random_point(rng))
        .find(|p| is_free(*p));

    let position = match sampled {
        Some(p) => p,
        None => {
            warn!(attempt_cap, "Random food placement kept missing, scanning free cells");
            let choices: Vec<Coords> = playground.interior_cells().filter(|p| is_free(*p)).collect();
            *choices.choose(rng)?
        }
    };

    let kind = FOOD_KINDS[rng.gen_range(0..FOOD_KINDS.len())];
    debug!(x = position.x, y = position.y, score = kind.score, "Spawned food");
    Some(Food::new(position, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::{rngs::StdRng, SeedableRng};

    fn long_snake(len: usize) -> Snake {
        let mut snake = Snake::new(Coords::new(1, 1), Direction::Right.vector()).unwrap();
        for _ in 1..len {
            assert!(snake.grow());
        }
        snake
    }

    #[test]
    fn test_spawn_avoids_snake_and_food() {
        let pg = Playground::new(10, 4).unwrap();
        let snake = long_snake(8);
        let mut food = FoodMap::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..30 {
            let item = generate_random_food(&pg, &snake, &food, &mut rng, 1000).unwrap();
            assert!(pg.is_within(item.position()));
            assert!(!snake.has_body_element_at(item.position()));
            assert!(!food.contains(item.position()));
            assert!(FOOD_KINDS.contains(&item.kind));
            assert!(food.insert(item).is_none());
        }

        // 40 cells, 8 snake, 30 food
        assert_eq!(food.len(), 30);
    }

    #[test]
    fn test_fallback_finds_last_free_cell() {
        let pg = Playground::new(3, 1).unwrap();
        let snake = long_snake(2);
        let food = FoodMap::new();
        let mut rng = StdRng::seed_from_u64(1);

        let item = generate_random_food(&pg, &snake, &food, &mut rng, 0).unwrap();
        assert_eq!(item.position(), Coords::new(3, 1));
    }

    #[test]
    fn test_full_board_yields_nothing() {
        let pg = Playground::new(3, 1).unwrap();
        let snake = long_snake(2);
        let mut food = FoodMap::new();
        food.insert(Food::new(Coords::new(3, 1), FOOD_KINDS[0]));
        let mut rng = StdRng::seed_from_u64(3);

        assert!(generate_random_food(&pg, &snake, &food, &mut rng, 50).is_none());
    }

    #[test]
    fn test_food_map_remove() {
        let mut food = FoodMap::new();
        food.insert(Food::new(Coords::new(3, 3), FOOD_KINDS[1]));

        assert!(food.contains(Coords::new(3, 3)));
        let eaten = food.remove(Coords::new(3, 3)).unwrap();
        assert_eq!((eaten.score(), eaten.symbol()), (2, '$'));
        assert!(food.remove(Coords::new(3, 3)).is_none());
        assert!(food.is_empty());
    }
}
