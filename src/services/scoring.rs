use crate::models::personality::PersonalityStats;

/// Derives personality statistics from the submitted answer values.
///
/// The formulas are placeholder arithmetic over the raw answers rather than a
/// lookup of per-option effect maps; each stat mixes a base offset with a
/// modulus so results stay inside a fixed band regardless of input length.
pub fn calculate_personality_stats(answers: &[i64]) -> PersonalityStats {
    // Wrapping folds: the sums feed a modulus, so wraparound on extreme
    // inputs only shifts which residue is picked instead of panicking.
    let total = answers.iter().fold(0i64, |acc, a| acc.wrapping_add(*a));
    let even_indexed = answers
        .iter()
        .step_by(2)
        .fold(0i64, |acc, a| acc.wrapping_add(*a));
    let odd_indexed = answers
        .iter()
        .skip(1)
        .step_by(2)
        .fold(0i64, |acc, a| acc.wrapping_add(*a));
    let weighted = answers
        .iter()
        .enumerate()
        .fold(0i64, |acc, (i, a)| {
            acc.wrapping_add(a.wrapping_mul(i as i64))
        });

    PersonalityStats {
        quantum_charisma: 50 + total.rem_euclid(50),
        absurdity_resistance: 30 + total.rem_euclid(70),
        sarcasm_level: 40 + even_indexed.rem_euclid(60),
        time_warping: 20 + odd_indexed.rem_euclid(80),
        cosmic_luck: 60 + weighted.rem_euclid(40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_answers_produce_expected_stats() {
        let stats = calculate_personality_stats(&[4, 3, 2, 1]);
        assert_eq!(stats.quantum_charisma, 60);
        assert_eq!(stats.absurdity_resistance, 40);
        assert_eq!(stats.sarcasm_level, 46);
        assert_eq!(stats.time_warping, 24);
        assert_eq!(stats.cosmic_luck, 70);
    }

    #[test]
    fn empty_answers_yield_base_offsets() {
        let stats = calculate_personality_stats(&[]);
        assert_eq!(stats.quantum_charisma, 50);
        assert_eq!(stats.absurdity_resistance, 30);
        assert_eq!(stats.sarcasm_level, 40);
        assert_eq!(stats.time_warping, 20);
        assert_eq!(stats.cosmic_luck, 60);
    }

    #[test]
    fn stats_stay_within_their_bands() {
        let samples: &[&[i64]] = &[
            &[1, 1, 1, 1],
            &[4, 4, 4, 4],
            &[0, 0, 0, 0],
            &[4, 1, 3, 2, 4, 1],
            &[100, 200, 300],
            &[i64::MAX, i64::MAX, i64::MAX, i64::MAX],
            &[i64::MIN, i64::MAX, i64::MIN, 7],
        ];
        for answers in samples {
            let stats = calculate_personality_stats(answers);
            assert!((50..100).contains(&stats.quantum_charisma));
            assert!((30..100).contains(&stats.absurdity_resistance));
            assert!((40..100).contains(&stats.sarcasm_level));
            assert!((20..100).contains(&stats.time_warping));
            assert!((60..100).contains(&stats.cosmic_luck));
        }
    }
}
