//! Keyword Optimization: skills breadth, common technical terms, and job-description overlap.

use crate::ats::keywords::{extract_keywords, present_in, COMMON_TECH_KEYWORDS};
use crate::ats::report::{Category, CategoryScore, Mark};
use crate::models::resume::Resume;

/// Points awarded when no job description is supplied.
const NEUTRAL_JOB_MATCH: i32 = 5;

/// Scores keyword coverage. `resume_text` is the plain-text rendering of `resume`.
pub fn evaluate(
    resume: &Resume,
    resume_text: &str,
    job_description: Option<&str>,
) -> CategoryScore {
    let mut out = CategoryScore::new(Category::KeywordOptimization);
    let haystack = resume_text.to_lowercase();

    let mut score = score_skills(&mut out, resume.skills.len());
    score += score_common_keywords(&mut out, &haystack);
    score += match job_description.filter(|jd| !jd.is_empty()) {
        Some(jd) => score_job_match(&mut out, &haystack, jd),
        None => {
            out.detail(Mark::Info, "No job description provided for keyword matching");
            NEUTRAL_JOB_MATCH
        }
    };

    out.with_score(score)
}

fn score_skills(out: &mut CategoryScore, skill_count: usize) -> i32 {
    if skill_count >= 10 {
        out.detail(
            Mark::Pass,
            format!("Strong skill set with {skill_count} skills listed"),
        );
        10
    } else if skill_count >= 5 {
        out.detail(
            Mark::Pass,
            format!("Good skill set with {skill_count} skills listed"),
        );
        out.suggest("Consider adding more relevant technical skills");
        6
    } else {
        out.detail(Mark::Warn, format!("Limited skills listed ({skill_count})"));
        out.suggest("Add more relevant skills to improve keyword matching");
        3
    }
}

fn score_common_keywords(out: &mut CategoryScore, haystack: &str) -> i32 {
    let found = present_in(COMMON_TECH_KEYWORDS, haystack).len();

    if found >= 5 {
        out.detail(
            Mark::Pass,
            format!("Contains {found} common technical keywords"),
        );
        8
    } else if found >= 3 {
        out.detail(
            Mark::Pass,
            format!("Contains {found} common technical keywords"),
        );
        out.suggest("Include more industry-standard technical terms");
        5
    } else {
        out.suggest("Add more technical keywords relevant to your field");
        2
    }
}

fn score_job_match(out: &mut CategoryScore, haystack: &str, job_description: &str) -> i32 {
    let job_keywords = extract_keywords(job_description);
    let matched = job_keywords
        .iter()
        .filter(|kw| haystack.contains(kw.as_str()))
        .count();
    let ratio = matched as f64 / job_keywords.len().max(1) as f64;
    let percent = (ratio * 100.0).round() as u32;

    if ratio >= 0.6 {
        out.detail(
            Mark::Pass,
            format!("Strong keyword match ({percent}% of job keywords found)"),
        );
        7
    } else if ratio >= 0.4 {
        out.detail(
            Mark::Warn,
            format!("Moderate keyword match ({percent}% of job keywords found)"),
        );
        out.suggest("Add more keywords from the job description");
        4
    } else {
        out.detail(
            Mark::Warn,
            format!("Low keyword match ({percent}% of job keywords found)"),
        );
        out.suggest("Significantly improve keyword matching with job description");
        1
    }
}
