//! ATS scoring engine: estimates how well a resume parses and ranks in applicant tracking systems.
//!
//! Default backend: `HeuristicAtsScorer` (pure-Rust, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn AtsScorer>` so the backend can be swapped at startup.

pub mod catalog;
pub mod contact_info;
pub mod content_quality;
pub mod formatting;
pub mod handlers;
pub mod keyword_optimization;
pub mod keywords;
pub mod report;
pub mod structure;

use tracing::debug;

use crate::ats::report::{AtsReport, Categories};
use crate::models::resume::Resume;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The ATS scorer trait. Implement this to swap backends without touching handlers.
///
/// Implementations must be pure: no interior mutability, safe to share across request tasks.
pub trait AtsScorer: Send + Sync {
    fn analyze(&self, resume: &Resume, job_description: Option<&str>) -> AtsReport;

    /// Backend label surfaced in responses for transparency.
    fn backend(&self) -> &'static str;
}

/// Rule-based scorer over five weighted categories.
pub struct HeuristicAtsScorer;

impl AtsScorer for HeuristicAtsScorer {
    fn analyze(&self, resume: &Resume, job_description: Option<&str>) -> AtsReport {
        analyze(resume, job_description)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume`, optionally against a job description.
///
/// Every category is computed independently from the same borrowed input; the report is
/// fully determined by the arguments.
pub fn analyze(resume: &Resume, job_description: Option<&str>) -> AtsReport {
    let resume_text = resume.to_plain_text();

    let categories = Categories {
        keyword_optimization: keyword_optimization::evaluate(
            resume,
            &resume_text,
            job_description,
        ),
        formatting: formatting::evaluate(resume),
        structure: structure::evaluate(resume),
        content_quality: content_quality::evaluate(resume, &resume_text),
        contact_info: contact_info::evaluate(resume),
    };

    let report = AtsReport::from_categories(categories);

    debug!(
        overall = report.overall_score,
        keywords = report.categories.keyword_optimization.score,
        formatting = report.categories.formatting.score,
        structure = report.categories.structure.score,
        content = report.categories.content_quality.score,
        contact = report.categories.contact_info.score,
        "ATS analysis complete"
    );

    report
}

/// Length of `text` in UTF-16 code units, the unit every length threshold is expressed in.
/// Characters outside the Basic Multilingual Plane (most emoji) count as two.
pub(crate) fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::report::Category;
    use crate::models::resume::{Education, PersonalInfo, Project, WorkExperience};

    fn strong_resume() -> Resume {
        Resume {
            personal_info: Some(PersonalInfo {
                name: "Margaret Hamilton".to_string(),
                email: "margaret@example.com".to_string(),
                phone: "617-555-0142".to_string(),
                location: "Cambridge, MA".to_string(),
                linkedin: Some("linkedin.com/in/mhamilton".to_string()),
                github: Some("github.com/mhamilton".to_string()),
            }),
            summary: Some(
                "Software engineer who led flight software development for 12 missions, \
                 designed asynchronous executives and implemented priority scheduling."
                    .to_string(),
            ),
            work_experience: vec![
                WorkExperience {
                    company: "MIT Instrumentation Lab".to_string(),
                    position: "Director, Software Engineering".to_string(),
                    duration: "1965 - 1976".to_string(),
                    description: "Led the on-board flight software team for Apollo guidance."
                        .to_string(),
                    achievements: vec!["Zero in-flight software failures across crewed missions"
                        .to_string()],
                },
                WorkExperience {
                    company: "SAGE Project".to_string(),
                    position: "Programmer".to_string(),
                    duration: "1961 - 1963".to_string(),
                    description: "Wrote radar data processing software in assembly."
                        .to_string(),
                    achievements: vec![],
                },
            ],
            education: vec![Education {
                institution: "Earlham College".to_string(),
                degree: "BA".to_string(),
                field_of_study: "Mathematics".to_string(),
                graduation_date: "1958".to_string(),
            }],
            skills: [
                "Python",
                "JavaScript",
                "SQL",
                "API design",
                "Database systems",
                "Cloud",
                "Agile",
                "Git",
                "Assembly",
                "Real-time systems",
                "Fault tolerance",
                "Scheduling",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            projects: vec![Project {
                name: "Apollo Guidance Computer".to_string(),
                description: "Priority-display error recovery".to_string(),
                technologies: vec!["AGC assembly".to_string()],
            }],
        }
    }

    #[test]
    fn test_strong_resume_scores_max_in_every_category() {
        let report = analyze(&strong_resume(), None);
        let cats = &report.categories;

        // neutral job match caps keywords at 10 + 8 + 5
        assert_eq!(cats.keyword_optimization.score, 23);
        assert_eq!(cats.formatting.score, 20);
        assert_eq!(cats.structure.score, 20);
        assert_eq!(cats.content_quality.score, 20);
        assert_eq!(cats.contact_info.score, 15);
        assert_eq!(report.overall_score, 98);
    }

    #[test]
    fn test_strong_resume_with_matching_job_reaches_100() {
        let jd = "Flight software engineer for real-time guidance systems. \
                  Python, scheduling, fault tolerance, assembly.";
        let report = analyze(&strong_resume(), Some(jd));
        assert_eq!(report.categories.keyword_optimization.score, 25);
        assert_eq!(report.overall_score, 100);
    }

    #[test]
    fn test_text_len_counts_utf16_units() {
        assert_eq!(text_len(""), 0);
        assert_eq!(text_len("resume"), 6);
        assert_eq!(text_len("café"), 4);
        assert_eq!(text_len("🚀"), 2);
    }

    #[test]
    fn test_empty_resume_bounds() {
        let report = analyze(&Resume::default(), None);
        let cats = &report.categories;

        assert_eq!(cats.formatting.score, 0);
        assert_eq!(cats.structure.score, 0);
        assert_eq!(cats.content_quality.score, 0);
        assert_eq!(cats.contact_info.score, 0);
        // limited skills 3 + common keywords 2 + neutral job match 5
        assert_eq!(cats.keyword_optimization.score, 10);
        assert_eq!(report.overall_score, 10);
    }

    #[test]
    fn test_scores_never_exceed_category_max() {
        for jd in [None, Some("rust"), Some("flight software guidance")] {
            for resume in [Resume::default(), strong_resume()] {
                let report = analyze(&resume, jd);
                let mut total = 0;
                for (category, score) in report.categories.iter() {
                    assert_eq!(score.max_score, category.max_score());
                    assert!(score.score <= score.max_score, "{category:?} over max");
                    total += score.score;
                }
                assert!(report.overall_score <= 100);
                assert_eq!(report.overall_score, total);
            }
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let resume = strong_resume();
        let jd = Some("Guidance software engineer with Python experience");
        let first = serde_json::to_string(&analyze(&resume, jd)).unwrap();
        let second = serde_json::to_string(&analyze(&resume, jd)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_job_description_is_informational() {
        let report = analyze(&strong_resume(), None);
        let keywords = &report.categories.keyword_optimization;
        assert!(keywords
            .details
            .iter()
            .any(|d| d == "ℹ No job description provided for keyword matching"));
        assert!(keywords.suggestions.is_empty());
    }

    #[test]
    fn test_missing_personal_info_only_suggests_contact_details() {
        let mut resume = strong_resume();
        resume.personal_info = None;
        let contact = analyze(&resume, None).categories.contact_info;
        assert_eq!(contact.score, 0);
        assert!(contact.details.is_empty());
        assert_eq!(contact.suggestions, vec!["Add complete contact information"]);
    }

    #[test]
    fn test_undated_experience_loses_structure_bonus() {
        let mut resume = strong_resume();
        resume.projects.clear();
        resume.work_experience[1].duration = String::new();
        let structure = analyze(&resume, None).categories.structure;
        assert_eq!(structure.score, 17);
        assert!(structure
            .suggestions
            .iter()
            .any(|s| s == "Ensure all work experiences include dates"));
    }

    #[test]
    fn test_field_names_never_match_keywords() {
        // an empty github field must not contribute "git"
        let resume = Resume {
            personal_info: Some(PersonalInfo {
                github: Some(String::new()),
                ..PersonalInfo::default()
            }),
            ..Resume::default()
        };
        let keywords = analyze(&resume, Some("experience")).categories.keyword_optimization;
        // 3 skills + 2 keywords + 1 job match (0%: "experience" is only a field name)
        assert_eq!(keywords.score, 6);
    }

    #[test]
    fn test_heuristic_scorer_delegates_to_analyze() {
        let scorer: &dyn AtsScorer = &HeuristicAtsScorer;
        let resume = strong_resume();
        assert_eq!(scorer.analyze(&resume, None), analyze(&resume, None));
        assert_eq!(scorer.backend(), "heuristic");
    }

    #[test]
    fn test_categories_iterate_in_report_order() {
        let report = analyze(&Resume::default(), None);
        let order: Vec<Category> = report.categories.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }
}
