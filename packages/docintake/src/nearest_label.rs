//! Associates a document label with the printed word closest to it.

use crate::geometry::squared_distance;
use crate::text_recognizer::RecognizedWord;

/// Text of the word whose anchor is closest to `label`'s anchor.
///
/// Words sharing the label's exact anchor point are skipped, which also skips the label
/// itself. Ties keep the earliest word in `words`. Returns `None` when nothing is left.
pub fn nearest_text<'w>(words: &'w [RecognizedWord], label: &RecognizedWord) -> Option<&'w str> {
    let origin = label.anchor();
    let mut nearest: Option<(f64, &RecognizedWord)> = None;

    for word in words {
        let distance = squared_distance(word.anchor(), origin);
        if distance == 0.0 {
            continue;
        }
        match nearest {
            Some((best, _)) if distance >= best => {}
            _ => nearest = Some((distance, word)),
        }
    }

    nearest.map(|(_, word)| word.text())
}
