pub const BASELINE_SCORE: u8 = 3;
pub const MAX_SCORE: u8 = 5;

pub const SUSTAINABILITY_KEYWORDS: [&str; 5] = ["eco", "sustainable", "organic", "recycled", "green"];

/// Keyword heuristic shared by every source adapter.
///
/// Starts at [`BASELINE_SCORE`] and adds one per keyword found (case-insensitive
/// substring) in the title or the description, capped at [`MAX_SCORE`].
pub fn sustainability_score(title: &str, description: Option<&str>) -> u8 {
    let title = title.to_lowercase();
    let description = description.map(str::to_lowercase);

    let matches = SUSTAINABILITY_KEYWORDS
        .iter()
        .filter(|keyword| {
            title.contains(*keyword)
                || description
                    .as_deref()
                    .is_some_and(|d| d.contains(*keyword))
        })
        .count() as u8;

    (BASELINE_SCORE + matches).min(MAX_SCORE)
}
