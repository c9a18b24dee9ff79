//! Contact Info: independent awards for each reachable contact channel.

use crate::ats::report::{Category, CategoryScore, Mark};
use crate::ats::text_len;
use crate::models::resume::Resume;

/// Minimum raw phone length, separators included.
const MIN_PHONE_CHARS: usize = 10;

pub fn evaluate(resume: &Resume) -> CategoryScore {
    let mut out = CategoryScore::new(Category::ContactInfo);

    let Some(info) = &resume.personal_info else {
        out.suggest("Add complete contact information");
        return out.with_score(0);
    };

    let mut score = 0;

    if !info.name.trim().is_empty() {
        score += 3;
        out.detail(Mark::Pass, "Name provided");
    } else {
        out.suggest("Add your full name");
    }

    if info.email.contains('@') {
        score += 3;
        out.detail(Mark::Pass, "Valid email address provided");
    } else {
        out.suggest("Add a valid email address");
    }

    if text_len(&info.phone) >= MIN_PHONE_CHARS {
        score += 3;
        out.detail(Mark::Pass, "Phone number provided");
    } else {
        out.suggest("Add phone number");
    }

    if !info.location.trim().is_empty() {
        score += 2;
        out.detail(Mark::Pass, "Location provided");
    } else {
        out.suggest("Add location (city, state)");
    }

    if info.linkedin.as_deref().is_some_and(|l| !l.is_empty()) {
        score += 2;
        out.detail(Mark::Pass, "LinkedIn profile included");
    } else {
        out.suggest("Add LinkedIn profile URL");
    }

    // optional bonus, never suggested
    if info.github.as_deref().is_some_and(|g| !g.is_empty()) {
        score += 2;
        out.detail(Mark::Pass, "GitHub profile included");
    }

    out.with_score(score)
}
