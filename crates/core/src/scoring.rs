use crate::{GameConfig, ModifierKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundScore {
    pub number_sum: i64,
    pub doubles: u32,
    pub doubled: i64,
    pub add_bonus: i64,
    pub flip_bonus: i64,
    pub total: i64,
}

/// Scores a row. Doubling applies to number points only; ADD and flip bonuses are added after.
pub fn score_row(numbers: &[u8], modifiers: &[ModifierKind], config: &GameConfig) -> RoundScore {
    let number_sum: i64 = numbers.iter().map(|value| i64::from(*value)).sum();
    let doubles = modifiers.iter().filter(|modifier| modifier.is_double()).count() as u32;
    let doubled = 2i64
        .checked_pow(doubles)
        .map_or(i64::MAX, |factor| number_sum.saturating_mul(factor));
    let add_bonus: i64 = modifiers.iter().map(|modifier| modifier.bonus()).sum();
    let flip_bonus = if numbers.len() >= config.flip_seven_count {
        config.flip_seven_bonus
    } else {
        0
    };
    RoundScore {
        number_sum,
        doubles,
        doubled,
        add_bonus,
        flip_bonus,
        total: doubled.saturating_add(add_bonus).saturating_add(flip_bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! score_case {
        ($name:ident, $numbers:expr, $modifiers:expr, $expected:expr) => {
            #[test]
            fn $name() {
                let score = score_row(&$numbers, &$modifiers, &GameConfig::default());
                assert_eq!(score.total, $expected);
            }
        };
    }

    score_case!(empty_row_scores_zero, [], [], 0);
    score_case!(zero_card_scores_zero, [0], [], 0);
    score_case!(plain_numbers_sum, [3, 5], [], 8);
    score_case!(double_only_numbers, [3, 5], [ModifierKind::Double], 16);
    score_case!(
        double_then_add,
        [3, 5],
        [ModifierKind::Double, ModifierKind::Add(4)],
        20
    );
    score_case!(
        add_order_does_not_matter,
        [3, 5],
        [ModifierKind::Add(4), ModifierKind::Double],
        20
    );
    score_case!(add_without_numbers, [], [ModifierKind::Add(10)], 10);
    score_case!(double_without_numbers, [], [ModifierKind::Double], 0);
    score_case!(
        all_adds_stack,
        [1],
        [
            ModifierKind::Add(2),
            ModifierKind::Add(4),
            ModifierKind::Add(6),
            ModifierKind::Add(8),
            ModifierKind::Add(10)
        ],
        31
    );
    score_case!(flip_seven_bonus, [1, 2, 3, 4, 8, 10, 12], [], 55);
    score_case!(
        flip_seven_bonus_is_not_doubled,
        [0, 1, 2, 3, 4, 5, 6],
        [ModifierKind::Double],
        57
    );

    #[test]
    fn breakdown_exposes_each_term() {
        let score = score_row(
            &[0, 1, 2, 3, 4, 5, 6],
            &[ModifierKind::Double, ModifierKind::Add(2)],
            &GameConfig::default(),
        );
        assert_eq!(score.number_sum, 21);
        assert_eq!(score.doubles, 1);
        assert_eq!(score.doubled, 42);
        assert_eq!(score.add_bonus, 2);
        assert_eq!(score.flip_bonus, 15);
        assert_eq!(score.total, 59);
    }

    #[test]
    fn flip_bonus_follows_config() {
        let config = GameConfig {
            flip_seven_count: 3,
            flip_seven_bonus: 5,
            ..GameConfig::default()
        };
        assert_eq!(score_row(&[1, 2, 3], &[], &config).total, 11);
        assert_eq!(score_row(&[1, 2], &[], &config).total, 3);
    }
}
