use serde::{Deserialize, Deserializer, Serialize};

/// Structured resume as produced by the upstream generator.
///
/// Every field tolerates absence: missing or `null` strings become empty, missing or `null` lists
/// become empty. Scoring treats empty and absent the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    /// Free-form date range, e.g. "Jan 2020 - Present".
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_of_study: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub graduation_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
}

/// Reads an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Resume {
    /// Summary text, or `None` when absent or empty.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }

    /// Every string value of the resume in field order, newline-joined.
    /// Field names are never part of the output.
    pub fn to_plain_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();

        if let Some(info) = &self.personal_info {
            parts.extend([
                info.name.as_str(),
                info.email.as_str(),
                info.phone.as_str(),
                info.location.as_str(),
            ]);
            parts.extend(info.linkedin.as_deref());
            parts.extend(info.github.as_deref());
        }

        parts.extend(self.summary.as_deref());

        for exp in &self.work_experience {
            parts.extend([
                exp.company.as_str(),
                exp.position.as_str(),
                exp.duration.as_str(),
                exp.description.as_str(),
            ]);
            parts.extend(exp.achievements.iter().map(String::as_str));
        }

        for edu in &self.education {
            parts.extend([
                edu.institution.as_str(),
                edu.degree.as_str(),
                edu.field_of_study.as_str(),
                edu.graduation_date.as_str(),
            ]);
        }

        parts.extend(self.skills.iter().map(String::as_str));

        for project in &self.projects {
            parts.extend([project.name.as_str(), project.description.as_str()]);
            parts.extend(project.technologies.iter().map(String::as_str));
        }

        parts.retain(|p| !p.is_empty());
        parts.join("\n")
    }
}
