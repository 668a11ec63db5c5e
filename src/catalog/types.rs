use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

/// One of the four broad educational tracks.
///
/// Variants are declared in definition order; ranking ties fall back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Science,
    Commerce,
    Arts,
    Vocational,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Science,
        Category::Commerce,
        Category::Arts,
        Category::Vocational,
    ];

    /// Stable lowercase key, e.g. "arts"
    pub fn key(self) -> &'static str {
        match self {
            Category::Science => "science",
            Category::Commerce => "commerce",
            Category::Arts => "arts",
            Category::Vocational => "vocational",
        }
    }

    /// Name shown to students, e.g. "Arts/Humanities"
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Science => "Science",
            Category::Commerce => "Commerce",
            Category::Arts => "Arts/Humanities",
            Category::Vocational => "Vocational/Technical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the stable key or the display name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.key().eq_ignore_ascii_case(needle) || c.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                format!(
                    "unknown stream '{}' (expected one of: science, commerce, arts, vocational)",
                    needle
                )
            })
    }
}

/// Weights an option contributes to each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointVector {
    pub science: u32,
    pub commerce: u32,
    pub arts: u32,
    pub vocational: u32,
}

impl PointVector {
    pub const fn new(science: u32, commerce: u32, arts: u32, vocational: u32) -> Self {
        Self {
            science,
            commerce,
            arts,
            vocational,
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Science => self.science,
            Category::Commerce => self.commerce,
            Category::Arts => self.arts,
            Category::Vocational => self.vocational,
        }
    }

    /// Largest single weight in the vector
    pub fn max_weight(&self) -> u32 {
        Category::ALL.iter().map(|c| self.get(*c)).max().unwrap_or(0)
    }
}

impl AddAssign for PointVector {
    fn add_assign(&mut self, rhs: Self) {
        self.science += rhs.science;
        self.commerce += rhs.commerce;
        self.arts += rhs.arts;
        self.vocational += rhs.vocational;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub points: PointVector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

/// Color tag used when presenting a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamColor {
    Primary,
    Warning,
    Success,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamInfo {
    pub category: Category,
    pub description: String,
    pub careers: Vec<String>,
    pub courses: Vec<String>,
    pub color: StreamColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollegeType {
    Government,
    Private,
}

impl fmt::Display for CollegeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollegeType::Government => f.write_str("Government"),
            CollegeType::Private => f.write_str("Private"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub annual: u64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    pub id: u32,
    pub name: String,
    pub district: String,
    pub state: String,
    #[serde(rename = "type")]
    pub college_type: CollegeType,
    pub courses: Vec<String>,
    pub fees: Fee,
    pub facilities: Vec<String>,
    pub website: String,
    pub established: u16,
    pub affiliation: String,
    pub rating: f64,
}

impl College {
    /// True if any offered course contains `course`, ignoring case
    pub fn offers_course(&self, course: &str) -> bool {
        let needle = course.to_lowercase();
        self.courses
            .iter()
            .any(|c| c.to_lowercase().contains(&needle))
    }
}
