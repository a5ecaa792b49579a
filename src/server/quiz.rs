use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::db::Question;

/// Picks one question uniformly at random from the candidates that have not
/// been served yet. `None` when nothing is left to ask, whether the category
/// was exhausted or empty to begin with.
pub fn pick_question(candidates: Vec<Question>, previous: &[i64]) -> Option<Question> {
    let fresh: Vec<Question> = candidates
        .into_iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();
    fresh.choose(&mut thread_rng()).cloned()
}
