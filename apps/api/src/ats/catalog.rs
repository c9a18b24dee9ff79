//! Category catalog: descriptive metadata shown alongside a report.

use serde::Serialize;

use crate::ats::report::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub description: &'static str,
    pub importance: Importance,
    pub max_score: u32,
    pub tips: &'static [&'static str],
}

/// Metadata for one category.
pub fn describe(category: Category) -> CategoryInfo {
    match category {
        Category::KeywordOptimization => info(
            category,
            "Keyword Optimization",
            "Matches between your resume and job description keywords. ATS systems scan for \
             specific terms related to skills, technologies, and qualifications.",
            Importance::High,
            &[
                "Include exact keywords from the job description",
                "Use industry-standard terminology",
                "Include both acronyms and full forms (e.g., \"API\" and \"Application Programming Interface\")",
                "Match the language used in the job posting",
            ],
        ),
        Category::Formatting => info(
            category,
            "Formatting & Parsing",
            "How well the ATS can parse and extract information from your resume. Complex \
             formatting, tables, images, or unusual fonts can cause parsing errors.",
            Importance::High,
            &[
                "Use simple, clean formatting",
                "Avoid tables, images, and graphics",
                "Use standard fonts (Arial, Calibri, Times New Roman)",
                "Save as PDF or Word document",
                "Avoid headers and footers",
            ],
        ),
        Category::Structure => info(
            category,
            "Structure & Organization",
            "Logical organization of sections and information. ATS systems expect standard \
             resume sections in a predictable order.",
            Importance::High,
            &[
                "Use clear section headings (Experience, Education, Skills)",
                "Maintain consistent formatting throughout",
                "Use reverse chronological order for experience",
                "Include dates in a consistent format",
                "Keep sections well-organized and easy to scan",
            ],
        ),
        Category::ContentQuality => info(
            category,
            "Content Quality",
            "Relevance and quality of content. Includes proper use of action verbs, \
             quantifiable achievements, and relevant experience.",
            Importance::Medium,
            &[
                "Use action verbs (led, developed, implemented)",
                "Quantify achievements with numbers and percentages",
                "Keep descriptions concise and impactful",
                "Focus on relevant experience",
                "Highlight transferable skills",
            ],
        ),
        Category::ContactInfo => info(
            category,
            "Contact Information",
            "Completeness and accuracy of contact details. Missing or incorrect information \
             can prevent employers from reaching you.",
            Importance::Medium,
            &[
                "Include full name, email, and phone number",
                "Add LinkedIn profile URL",
                "Include location (city, state)",
                "Ensure all contact information is current",
                "Use a professional email address",
            ],
        ),
    }
}

fn info(
    id: Category,
    name: &'static str,
    description: &'static str,
    importance: Importance,
    tips: &'static [&'static str],
) -> CategoryInfo {
    CategoryInfo {
        id,
        name,
        description,
        importance,
        max_score: id.max_score(),
        tips,
    }
}

/// The full catalog in report order.
pub fn all() -> Vec<CategoryInfo> {
    Category::ALL.into_iter().map(describe).collect()
}
