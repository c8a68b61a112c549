use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Thriller,
    Fantasy,
    Romance,
    SciFi,
    Mystery,
    Literary,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Thriller,
        Genre::Fantasy,
        Genre::Romance,
        Genre::SciFi,
        Genre::Mystery,
        Genre::Literary,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "thriller" => Some(Genre::Thriller),
            "fantasy" => Some(Genre::Fantasy),
            "romance" => Some(Genre::Romance),
            "scifi" | "sci-fi" | "science fiction" => Some(Genre::SciFi),
            "mystery" => Some(Genre::Mystery),
            "literary" | "literary fiction" => Some(Genre::Literary),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Genre::Thriller => 0,
            Genre::Fantasy => 1,
            Genre::Romance => 2,
            Genre::SciFi => 3,
            Genre::Mystery => 4,
            Genre::Literary => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Genre::Thriller => "Thriller",
            Genre::Fantasy => "Fantasy",
            Genre::Romance => "Romance",
            Genre::SciFi => "SciFi",
            Genre::Mystery => "Mystery",
            Genre::Literary => "Literary",
        }
    }
}

/// Inclusive numeric target range. `min <= max` holds for every built-in profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Target ranges a genre is benchmarked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreProfile {
    pub name: Genre,
    pub ideal_sentence_length_range: Range,
    pub max_adverbs_per_1000_words: f64,
    pub max_passive_voice_percent: f64,
    pub ideal_reading_grade_range: Range,
    pub ideal_dialogue_percent_range: Range,
}

/// Profiles in `Genre::ALL` order.
pub(crate) fn standard_profiles() -> [GenreProfile; 6] {
    [
        GenreProfile {
            name: Genre::Thriller,
            ideal_sentence_length_range: Range::new(8.0, 15.0),
            max_adverbs_per_1000_words: 10.0,
            max_passive_voice_percent: 5.0,
            ideal_reading_grade_range: Range::new(4.0, 7.0),
            ideal_dialogue_percent_range: Range::new(20.0, 50.0),
        },
        GenreProfile {
            name: Genre::Fantasy,
            ideal_sentence_length_range: Range::new(12.0, 22.0),
            max_adverbs_per_1000_words: 15.0,
            max_passive_voice_percent: 10.0,
            ideal_reading_grade_range: Range::new(6.0, 10.0),
            ideal_dialogue_percent_range: Range::new(15.0, 40.0),
        },
        GenreProfile {
            name: Genre::Romance,
            ideal_sentence_length_range: Range::new(10.0, 18.0),
            max_adverbs_per_1000_words: 15.0,
            max_passive_voice_percent: 8.0,
            ideal_reading_grade_range: Range::new(5.0, 8.0),
            ideal_dialogue_percent_range: Range::new(30.0, 60.0),
        },
        GenreProfile {
            name: Genre::SciFi,
            ideal_sentence_length_range: Range::new(12.0, 22.0),
            max_adverbs_per_1000_words: 12.0,
            max_passive_voice_percent: 10.0,
            ideal_reading_grade_range: Range::new(7.0, 11.0),
            ideal_dialogue_percent_range: Range::new(15.0, 40.0),
        },
        GenreProfile {
            name: Genre::Mystery,
            ideal_sentence_length_range: Range::new(10.0, 18.0),
            max_adverbs_per_1000_words: 12.0,
            max_passive_voice_percent: 8.0,
            ideal_reading_grade_range: Range::new(5.0, 9.0),
            ideal_dialogue_percent_range: Range::new(25.0, 50.0),
        },
        GenreProfile {
            name: Genre::Literary,
            ideal_sentence_length_range: Range::new(15.0, 30.0),
            max_adverbs_per_1000_words: 20.0,
            max_passive_voice_percent: 12.0,
            ideal_reading_grade_range: Range::new(8.0, 14.0),
            ideal_dialogue_percent_range: Range::new(10.0, 35.0),
        },
    ]
}
