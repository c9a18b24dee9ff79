//! Content Quality: summary length and verbs, experience depth, and quantified results.

use std::ops::RangeInclusive;

use crate::ats::keywords::{present_in, ACTION_VERBS};
use crate::ats::report::{Category, CategoryScore, Mark};
use crate::ats::text_len;
use crate::models::resume::{Resume, WorkExperience};

const IDEAL_SUMMARY_CHARS: RangeInclusive<usize> = 100..=300;
/// Descriptions must be longer than this to count as detailed.
const MIN_DESCRIPTION_CHARS: usize = 20;

/// Scores content quality. `resume_text` is the plain-text rendering of `resume`.
pub fn evaluate(resume: &Resume, resume_text: &str) -> CategoryScore {
    let mut out = CategoryScore::new(Category::ContentQuality);
    let mut score = 0;

    if let Some(summary) = resume.summary_text() {
        score += score_summary(&mut out, summary);
    }

    if !resume.work_experience.is_empty() {
        score += score_experience(&mut out, &resume.work_experience);
    }

    if resume_text.chars().any(|c| c.is_ascii_digit()) {
        score += 5;
        out.detail(Mark::Pass, "Resume includes quantifiable metrics");
    } else {
        out.suggest("Add numbers and percentages to quantify achievements");
    }

    out.with_score(score)
}

fn score_summary(out: &mut CategoryScore, summary: &str) -> i32 {
    let mut score = 0;

    if IDEAL_SUMMARY_CHARS.contains(&text_len(summary)) {
        score += 5;
        out.detail(Mark::Pass, "Professional summary has appropriate length");
    } else {
        score += 2;
        out.suggest("Optimize summary length (100-300 characters recommended)");
    }

    if !present_in(ACTION_VERBS, &summary.to_lowercase()).is_empty() {
        score += 2;
        out.detail(Mark::Pass, "Summary uses action verbs");
    } else {
        out.suggest("Use action verbs in summary (led, developed, implemented)");
    }

    score
}

fn score_experience(out: &mut CategoryScore, experience: &[WorkExperience]) -> i32 {
    let mut score = 0;

    if experience.iter().any(|exp| !exp.achievements.is_empty()) {
        score += 5;
        out.detail(Mark::Pass, "Work experience includes achievements");
    } else {
        score += 2;
        out.suggest("Add quantifiable achievements to work experience");
    }

    let detailed = experience
        .iter()
        .all(|exp| text_len(&exp.description) > MIN_DESCRIPTION_CHARS);
    if detailed {
        score += 3;
        out.detail(Mark::Pass, "Work experiences have detailed descriptions");
    } else {
        out.suggest("Add more detailed descriptions to work experiences");
    }

    score
}
