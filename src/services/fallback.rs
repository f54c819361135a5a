/// Fallback recommendation generator
///
/// The offline backstop behind every provider: a pure keyword lookup over
/// the lower-cased mood text against ordered keyword groups, returning the
/// first matching group's canned list. No I/O, no failure mode, never an
/// empty list.
use crate::models::{ContentType, Recommendation};

/// Generates canned recommendations for a mood.
///
/// Total function: any input, including an empty string, produces a
/// non-empty list, and repeated calls with the same mood produce the same
/// list.
pub fn fallback_recommendations(mood: &str) -> Vec<Recommendation> {
    let mood_lower = mood.to_lowercase();

    if contains_any(&mood_lower, &["nostalg", "90s", "retro", "throwback"]) {
        return nineties_list();
    }

    if contains_any(&mood_lower, &["sad", "down", "depressed"]) {
        return comfort_list();
    }

    if contains_any(&mood_lower, &["happy", "excited", "energetic"]) {
        return upbeat_list();
    }

    if contains_any(&mood_lower, &["scared", "horror", "thriller"]) {
        return suspense_list();
    }

    default_list()
}

fn contains_any(mood: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| mood.contains(keyword))
}

fn rec(
    title: &str,
    content_type: ContentType,
    description: &str,
    reason: &str,
) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        content_type,
        description: description.to_string(),
        reason: reason.to_string(),
    }
}

fn nineties_list() -> Vec<Recommendation> {
    vec![
        rec(
            "Friends",
            ContentType::TvShow,
            "Six friends navigate life and love in New York City.",
            "A 90s staple that defined the decade's comfort television.",
        ),
        rec(
            "Jurassic Park",
            ContentType::Movie,
            "Cloned dinosaurs break loose in an island theme park.",
            "Practical-effects spectacle straight out of 1993.",
        ),
        rec(
            "The Fresh Prince of Bel-Air",
            ContentType::TvShow,
            "A street-smart teen moves in with his wealthy relatives.",
            "Pure 90s energy, from the wardrobe to the theme song.",
        ),
        rec(
            "Toy Story",
            ContentType::Movie,
            "Toys come to life whenever their owner leaves the room.",
            "The film that anchored a generation of 90s childhoods.",
        ),
        rec(
            "90s Commercials Compilation",
            ContentType::YouTubeVideo,
            "A reel of vintage television ads and jingles.",
            "Nothing brings the decade back faster than its commercials.",
        ),
    ]
}

fn comfort_list() -> Vec<Recommendation> {
    vec![
        rec(
            "The Pursuit of Happyness",
            ContentType::Movie,
            "A struggling salesman becomes homeless but never gives up.",
            "Inspiring story that shows resilience and hope.",
        ),
        rec(
            "Parks and Recreation",
            ContentType::TvShow,
            "A mockumentary about local government employees.",
            "Uplifting and funny, perfect for lifting your spirits.",
        ),
        rec(
            "Cute Animal Compilations",
            ContentType::YouTubeVideo,
            "Adorable animals being cute.",
            "Instant mood booster with wholesome content.",
        ),
    ]
}

fn upbeat_list() -> Vec<Recommendation> {
    vec![
        rec(
            "La La Land",
            ContentType::Movie,
            "A musical about two artists falling in love in Los Angeles.",
            "Vibrant, energetic, and full of joy.",
        ),
        rec(
            "Brooklyn Nine-Nine",
            ContentType::TvShow,
            "Comedy about detectives in a New York precinct.",
            "Hilarious and upbeat, matches your positive energy.",
        ),
        rec(
            "Epic Fail Compilations",
            ContentType::YouTubeVideo,
            "Funny fails and bloopers.",
            "Light-hearted entertainment that keeps the good vibes going.",
        ),
    ]
}

fn suspense_list() -> Vec<Recommendation> {
    vec![
        rec(
            "Get Out",
            ContentType::Movie,
            "A psychological horror film about a young man visiting his girlfriend's family.",
            "Thrilling and thought-provoking without being too intense.",
        ),
        rec(
            "Stranger Things",
            ContentType::TvShow,
            "Supernatural mystery set in the 1980s.",
            "Perfect blend of suspense and nostalgia.",
        ),
        rec(
            "True Crime Documentaries",
            ContentType::YouTubeVideo,
            "Mysterious and intriguing crime stories.",
            "Engaging mysteries that satisfy your curiosity.",
        ),
    ]
}

fn default_list() -> Vec<Recommendation> {
    vec![
        rec(
            "The Office",
            ContentType::TvShow,
            "A mockumentary sitcom about office workers.",
            "Classic comedy that works for any mood.",
        ),
        rec(
            "Inception",
            ContentType::Movie,
            "A mind-bending sci-fi thriller about dreams.",
            "Engaging and thought-provoking entertainment.",
        ),
        rec(
            "TED Talks",
            ContentType::YouTubeVideo,
            "Inspiring talks on various topics.",
            "Educational and inspiring content.",
        ),
    ]
}
