// Random word forms for spot checks and property sweeps.
//
// Picks a root uniformly from the lexicon, then each slot uniformly from
// its vocabulary (absence included where the slot allows it). Slot
// cardinalities are therefore 4, 4, 4, 7, 3, 5, matching the rings.
//
// Takes `&mut SuffixRng` so a printed seed reproduces the same sequence.

use quechua_rings_prng::SuffixRng;

use crate::Lexicon;
use crate::suffixes::vocabulary;
use crate::types::{SLOT_COUNT, Slot, WordForm};

/// Draw one word form. `None` if the lexicon is empty.
pub fn random_word_form(lexicon: &Lexicon, rng: &mut SuffixRng) -> Option<WordForm> {
    let entry = rng.choose(lexicon.all())?;
    let mut suffixes = [""; SLOT_COUNT];
    for (slot, out) in Slot::ALL.iter().zip(suffixes.iter_mut()) {
        *out = rng.choose(vocabulary(*slot))?.text;
    }
    Some(WordForm::from_vocabulary(&entry.root, suffixes))
}
