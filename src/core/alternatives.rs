use crate::models::{ConfidenceWeights, Size, SizeAlternative};

/// Propose the neighbouring sizes of a recommendation that are in stock
///
/// Returns at most two entries, always ordered [smaller, larger]. A neighbour
/// is included only when it exists in the size sequence and appears in
/// `available`.
pub fn select_alternatives(
    recommended: Size,
    available: &[Size],
    weights: &ConfidenceWeights,
) -> Vec<SizeAlternative> {
    let candidates = [
        (recommended.smaller(), weights.smaller),
        (recommended.larger(), weights.larger),
    ];

    candidates
        .into_iter()
        .filter_map(|(size, confidence)| {
            size.filter(|s| available.contains(s))
                .map(|size| SizeAlternative { size, confidence })
        })
        .collect()
}
