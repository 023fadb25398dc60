use bevy::prelude::*;

/// Running score of the current playthrough.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(i32);

impl Score {
    pub fn add(&mut self, points: i32) {
        self.0 = self.0.saturating_add(points);
    }

    pub fn subtract(&mut self, points: i32) {
        self.0 = self.0.saturating_sub(points);
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_can_drop_below_zero() {
        let mut score = Score::default();
        score.add(10);
        score.subtract(5);
        score.subtract(15);
        assert_eq!(score.value(), -10);

        score.reset();
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let mut score = Score::default();
        score.add(i32::MAX);
        score.add(10);
        assert_eq!(score.value(), i32::MAX);

        score.reset();
        score.subtract(i32::MAX);
        score.subtract(10);
        assert_eq!(score.value(), i32::MIN);
    }
}
