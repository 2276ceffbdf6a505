//! Star rating extraction from CSS class attributes.

/// Number words checked against the rating element's class value, in the
/// order they are tried.
const RATING_WORDS: [(&str, u8); 5] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
];

/// Maps a star-rating class attribute to a numeric rating.
///
/// The catalog encodes ratings as a class like `star-rating Three`. The
/// match is a case-insensitive substring check for the number words one
/// through five, tried in that order; the first hit wins. Anything else
/// yields 0, meaning "unrated".
///
/// # Example
///
/// ```
/// use bookgrab::extract::parse_rating;
///
/// assert_eq!(parse_rating("star-rating Three"), 3);
/// assert_eq!(parse_rating("star-rating FIVE"), 5);
/// assert_eq!(parse_rating("star-rating"), 0);
/// ```
pub fn parse_rating(class_value: &str) -> u8 {
    let lowered = class_value.to_ascii_lowercase();
    for (word, stars) in RATING_WORDS {
        if lowered.contains(word) {
            return stars;
        }
    }
    0
}
