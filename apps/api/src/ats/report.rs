//! ATS report data model: the output shared by every scorer backend.

use serde::Serialize;

/// One of the five scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    KeywordOptimization,
    Formatting,
    Structure,
    ContentQuality,
    ContactInfo,
}

impl Category {
    /// Canonical report order.
    pub const ALL: [Category; 5] = [
        Category::KeywordOptimization,
        Category::Formatting,
        Category::Structure,
        Category::ContentQuality,
        Category::ContactInfo,
    ];

    pub fn max_score(self) -> u32 {
        match self {
            Category::KeywordOptimization => 25,
            Category::Formatting => 20,
            Category::Structure => 20,
            Category::ContentQuality => 20,
            Category::ContactInfo => 15,
        }
    }

    /// Wire key, as used in `AtsReport.categories`.
    pub fn id(self) -> &'static str {
        match self {
            Category::KeywordOptimization => "keywordOptimization",
            Category::Formatting => "formatting",
            Category::Structure => "structure",
            Category::ContentQuality => "contentQuality",
            Category::ContactInfo => "contactInfo",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// Prefix annotating a detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Pass,
    Warn,
    Info,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Mark::Pass => '✓',
            Mark::Warn => '⚠',
            Mark::Info => 'ℹ',
        }
    }
}

/// Score and explanation for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: u32,
    pub max_score: u32,
    pub details: Vec<String>,
    pub suggestions: Vec<String>,
}

impl CategoryScore {
    pub(crate) fn new(category: Category) -> Self {
        Self {
            score: 0,
            max_score: category.max_score(),
            details: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub(crate) fn detail(&mut self, mark: Mark, text: impl AsRef<str>) {
        self.details
            .push(format!("{} {}", mark.symbol(), text.as_ref()));
    }

    pub(crate) fn suggest(&mut self, text: impl Into<String>) {
        self.suggestions.push(text.into());
    }

    /// Sets the score from a raw tally, clamped into `0..=max_score`.
    pub(crate) fn with_score(mut self, raw: i32) -> Self {
        self.score = raw.clamp(0, self.max_score as i32) as u32;
        self
    }
}

/// The fixed five-key category mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    pub keyword_optimization: CategoryScore,
    pub formatting: CategoryScore,
    pub structure: CategoryScore,
    pub content_quality: CategoryScore,
    pub contact_info: CategoryScore,
}

impl Categories {
    pub fn get(&self, category: Category) -> &CategoryScore {
        match category {
            Category::KeywordOptimization => &self.keyword_optimization,
            Category::Formatting => &self.formatting,
            Category::Structure => &self.structure,
            Category::ContentQuality => &self.content_quality,
            Category::ContactInfo => &self.contact_info,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryScore)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Full ATS report returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub overall_score: u32, // 0 – 100
    pub categories: Categories,
}

impl AtsReport {
    /// Aggregates category results into the overall percentage.
    pub fn from_categories(categories: Categories) -> Self {
        let (total, total_max) = categories
            .iter()
            .fold((0u32, 0u32), |(s, m), (_, c)| (s + c.score, m + c.max_score));

        let overall_score = if total_max > 0 {
            (100.0 * f64::from(total) / f64::from(total_max)).round() as u32
        } else {
            0
        };

        Self {
            overall_score,
            categories,
        }
    }

    pub fn rating(&self) -> ScoreBand {
        ScoreBand::for_score(self.overall_score)
    }
}

/// Coarse rating of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            _ => ScoreBand::NeedsImprovement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(category: Category, score: i32) -> CategoryScore {
        CategoryScore::new(category).with_score(score)
    }

    fn categories(scores: [i32; 5]) -> Categories {
        Categories {
            keyword_optimization: scored(Category::KeywordOptimization, scores[0]),
            formatting: scored(Category::Formatting, scores[1]),
            structure: scored(Category::Structure, scores[2]),
            content_quality: scored(Category::ContentQuality, scores[3]),
            contact_info: scored(Category::ContactInfo, scores[4]),
        }
    }

    #[test]
    fn test_max_scores_sum_to_100() {
        let total: u32 = Category::ALL.iter().map(|c| c.max_score()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_category_id_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id("layout"), None);
    }

    #[test]
    fn test_with_score_clamps_both_ends() {
        assert_eq!(scored(Category::ContactInfo, -4).score, 0);
        assert_eq!(scored(Category::ContactInfo, 17).score, 15);
        assert_eq!(scored(Category::ContactInfo, 9).score, 9);
    }

    #[test]
    fn test_detail_is_prefixed_with_mark() {
        let mut cat = CategoryScore::new(Category::Structure);
        cat.detail(Mark::Pass, "Skills section present");
        cat.detail(Mark::Warn, "Limited");
        cat.detail(Mark::Info, "FYI");
        assert_eq!(
            cat.details,
            vec!["✓ Skills section present", "⚠ Limited", "ℹ FYI"]
        );
    }

    #[test]
    fn test_overall_score_is_rounded_percentage() {
        let report = AtsReport::from_categories(categories([25, 20, 20, 20, 15]));
        assert_eq!(report.overall_score, 100);

        let report = AtsReport::from_categories(categories([12, 10, 3, 0, 0]));
        assert_eq!(report.overall_score, 25);

        let report = AtsReport::from_categories(categories([0, 0, 0, 0, 0]));
        assert_eq!(report.overall_score, 0);
    }

    #[test]
    fn test_report_serializes_five_camel_case_keys() {
        let report = AtsReport::from_categories(categories([1, 2, 3, 4, 5]));
        let value = serde_json::to_value(&report).unwrap();
        let keys: Vec<&String> = value["categories"].as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        for category in Category::ALL {
            assert!(value["categories"].get(category.id()).is_some());
        }
        assert_eq!(value["categories"]["contactInfo"]["maxScore"], 15);
        assert_eq!(value["overallScore"], 15);
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_score_band_serializes_snake_case() {
        let json = serde_json::to_string(&ScoreBand::NeedsImprovement).unwrap();
        assert_eq!(json, r#""needs_improvement""#);
    }
}
