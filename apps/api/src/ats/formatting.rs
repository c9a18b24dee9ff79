//! Formatting: starts from full marks and deducts for each missing section.

use crate::ats::report::{Category, CategoryScore, Mark};
use crate::ats::text_len;
use crate::models::resume::Resume;

/// Summaries at or below this many characters count as missing.
const MIN_SUMMARY_CHARS: usize = 50;

pub fn evaluate(resume: &Resume) -> CategoryScore {
    let mut out = CategoryScore::new(Category::Formatting);
    let mut score = out.max_score as i32;

    if resume.personal_info.is_some() {
        out.detail(Mark::Pass, "Personal information properly structured");
    } else {
        score -= 5;
        out.suggest("Ensure personal information is complete");
    }

    let summary_chars = resume.summary_text().map_or(0, text_len);
    if summary_chars > MIN_SUMMARY_CHARS {
        out.detail(Mark::Pass, "Professional summary present");
    } else {
        score -= 3;
        out.suggest("Add a professional summary (2-3 sentences)");
    }

    let experience = resume.work_experience.len();
    if experience > 0 {
        out.detail(
            Mark::Pass,
            format!("Work experience section with {experience} entries"),
        );
    } else {
        score -= 5;
        out.suggest("Add work experience section");
    }

    let education = resume.education.len();
    if education > 0 {
        out.detail(
            Mark::Pass,
            format!("Education section with {education} entries"),
        );
    } else {
        score -= 3;
        out.suggest("Add education section");
    }

    let skills = resume.skills.len();
    if skills > 0 {
        out.detail(Mark::Pass, format!("Skills section with {skills} skills"));
    } else {
        score -= 4;
        out.suggest("Add skills section");
    }

    out.with_score(score)
}
