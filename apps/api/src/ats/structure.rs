//! Structure: weighted presence of standard sections, plus a bonus for dated experience.

use crate::ats::report::{Category, CategoryScore, Mark};
use crate::models::resume::Resume;

/// Awarded when every work experience entry carries a duration.
const DATED_EXPERIENCE_BONUS: i32 = 2;

struct Section {
    name: &'static str,
    present: bool,
    weight: i32,
}

fn sections(resume: &Resume) -> [Section; 6] {
    [
        Section {
            name: "Personal Info",
            present: resume.personal_info.is_some(),
            weight: 3,
        },
        Section {
            name: "Summary",
            present: resume.summary_text().is_some(),
            weight: 3,
        },
        Section {
            name: "Work Experience",
            present: !resume.work_experience.is_empty(),
            weight: 5,
        },
        Section {
            name: "Education",
            present: !resume.education.is_empty(),
            weight: 3,
        },
        Section {
            name: "Skills",
            present: !resume.skills.is_empty(),
            weight: 3,
        },
        Section {
            name: "Projects",
            present: !resume.projects.is_empty(),
            weight: 3,
        },
    ]
}

pub fn evaluate(resume: &Resume) -> CategoryScore {
    let mut out = CategoryScore::new(Category::Structure);
    let mut score = 0;

    for section in sections(resume) {
        if section.present {
            score += section.weight;
            out.detail(Mark::Pass, format!("{} section present", section.name));
        } else {
            out.suggest(format!("Add {} section", section.name));
        }
    }

    if !resume.work_experience.is_empty() {
        let all_dated = resume
            .work_experience
            .iter()
            .all(|exp| !exp.duration.is_empty());
        if all_dated {
            score += DATED_EXPERIENCE_BONUS;
            out.detail(Mark::Pass, "All work experiences include dates");
        } else {
            out.suggest("Ensure all work experiences include dates");
        }
    }

    out.with_score(score)
}
