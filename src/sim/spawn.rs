//! Item spawning and difficulty progression
//!
//! Each spawn picks a uniform lane and rolls the category table, then the
//! spawn interval is recomputed so higher levels squeeze items closer
//! together, down to a hard floor.

use rand::Rng;

use super::state::{FallingItem, ItemKind, Lane};
use crate::consts::*;
use crate::lane_center;

/// Category table over a uniform roll in [0, 1):
/// 20% bomb, 30% banana, 20% orange, 30% apple.
pub fn kind_for_roll(roll: f64) -> ItemKind {
    if roll < 0.2 {
        ItemKind::Bomb
    } else if roll < 0.5 {
        ItemKind::Banana
    } else if roll < 0.7 {
        ItemKind::Orange
    } else {
        ItemKind::Apple
    }
}

/// Fall speed for a kind at a level: level-scaled base plus the kind's kicker
pub fn fall_speed(kind: ItemKind, level: u32) -> f32 {
    BASE_FALL_SPEED + level as f32 * FALL_SPEED_PER_LEVEL + kind.speed_modifier()
}

/// Gap until the next spawn. Shrinks 100ms per level, floored at 500ms.
pub fn spawn_interval_ms(level: u32) -> f64 {
    (INITIAL_SPAWN_INTERVAL_MS - level as f64 * SPAWN_INTERVAL_STEP_MS)
        .max(MIN_SPAWN_INTERVAL_MS)
}

/// Roll one new item just above the top edge of the playfield
pub fn spawn_item<R: Rng>(rng: &mut R, level: u32, playfield_width: f32) -> FallingItem {
    let lane = rng.random_range(0..LANE_COUNT);
    let kind = kind_for_roll(rng.random::<f64>());

    FallingItem {
        x: lane_center(lane, playfield_width),
        y: ITEM_SPAWN_Y,
        kind,
        score_value: kind.score_value(),
        fall_speed: fall_speed(kind, level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_roll_table_boundaries() {
        assert_eq!(kind_for_roll(0.0), ItemKind::Bomb);
        assert_eq!(kind_for_roll(0.19), ItemKind::Bomb);
        assert_eq!(kind_for_roll(0.2), ItemKind::Banana);
        assert_eq!(kind_for_roll(0.49), ItemKind::Banana);
        assert_eq!(kind_for_roll(0.5), ItemKind::Orange);
        assert_eq!(kind_for_roll(0.69), ItemKind::Orange);
        assert_eq!(kind_for_roll(0.7), ItemKind::Apple);
        assert_eq!(kind_for_roll(0.999), ItemKind::Apple);
    }

    #[test]
    fn test_fall_speed_ramp() {
        // Level 1 apple: 3 + 0.5
        assert_eq!(fall_speed(ItemKind::Apple, 1), 3.5);
        // Bombs fall 2 faster, oranges 1 faster
        assert_eq!(fall_speed(ItemKind::Bomb, 1), 5.5);
        assert_eq!(fall_speed(ItemKind::Orange, 1), 4.5);
        // Level scales the base
        assert_eq!(fall_speed(ItemKind::Apple, 4), 5.0);
    }

    #[test]
    fn test_spawn_interval_schedule() {
        assert_eq!(spawn_interval_ms(1), 1400.0);
        assert_eq!(spawn_interval_ms(5), 1000.0);
        assert_eq!(spawn_interval_ms(10), 500.0);
        // Clamped at the floor from level 10 onward
        assert_eq!(spawn_interval_ms(11), 500.0);
        assert_eq!(spawn_interval_ms(100), 500.0);
    }

    #[test]
    fn test_spawn_item_lands_on_a_lane_center() {
        let mut rng = Pcg32::seed_from_u64(7);
        let width = 600.0;
        let centers = [100.0, 300.0, 500.0];
        for _ in 0..50 {
            let item = spawn_item(&mut rng, 1, width);
            assert!(centers.contains(&item.x), "off-lane spawn at {}", item.x);
            assert_eq!(item.y, ITEM_SPAWN_Y);
            assert_eq!(item.score_value, item.kind.score_value());
            assert_eq!(item.fall_speed, fall_speed(item.kind, 1));
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..20 {
            let ia = spawn_item(&mut a, 3, 600.0);
            let ib = spawn_item(&mut b, 3, 600.0);
            assert_eq!(ia.kind, ib.kind);
            assert_eq!(ia.x, ib.x);
        }
    }

    proptest! {
        #[test]
        fn prop_spawn_interval_never_below_floor(level in 1u32..10_000) {
            let interval = spawn_interval_ms(level);
            prop_assert!(interval >= MIN_SPAWN_INTERVAL_MS);
            prop_assert!(interval <= INITIAL_SPAWN_INTERVAL_MS);
        }

        #[test]
        fn prop_roll_table_total(roll in 0.0f64..1.0) {
            // Every roll maps to exactly one kind, and bombs never score
            let kind = kind_for_roll(roll);
            if kind.is_bomb() {
                prop_assert_eq!(kind.score_value(), 0);
            } else {
                prop_assert!(kind.score_value() > 0);
            }
        }
    }
}
