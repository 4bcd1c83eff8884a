//! Expression score mapping and dominant-mood extraction.

/// Insertion-ordered mapping from expression name to confidence score,
/// produced by one detection cycle. Scores are in [0, 1]. Not persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionScores(Vec<(String, f64)>);

impl ExpressionScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, expression: impl Into<String>, score: f64) {
        self.0.push((expression.into(), score));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The expression with the strictly highest score. Ties keep the
    /// first-encountered key in iteration order.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        self.0.iter().fold(None, |best, (expression, score)| match best {
            Some((_, best_score)) if *score > best_score => Some((expression.as_str(), *score)),
            None => Some((expression.as_str(), *score)),
            _ => best,
        })
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ExpressionScores {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_picks_highest_score() {
        let scores: ExpressionScores =
            [("happy", 0.2), ("sad", 0.7), ("neutral", 0.1)].into_iter().collect();

        assert_eq!(scores.dominant(), Some(("sad", 0.7)));
    }

    #[test]
    fn tie_keeps_first_encountered_key() {
        let scores: ExpressionScores = [("happy", 0.5), ("sad", 0.5)].into_iter().collect();
        assert_eq!(scores.dominant(), Some(("happy", 0.5)));

        let scores: ExpressionScores = [("sad", 0.5), ("happy", 0.5)].into_iter().collect();
        assert_eq!(scores.dominant(), Some(("sad", 0.5)));
    }

    #[test]
    fn empty_mapping_has_no_dominant_expression() {
        assert_eq!(ExpressionScores::new().dominant(), None);
    }
}
