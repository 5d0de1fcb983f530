use serde::{de, Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::promotion::{AcademicRank, AccountId, FacultyProfile, ScholarlyRecord};

pub(crate) fn parse_profiles<R: Read>(reader: R) -> Result<Vec<FacultyProfile>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut profiles = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        profiles.push(row.into_profile());
    }

    Ok(profiles)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Account")]
    account: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Department", default, deserialize_with = "empty_string_as_none")]
    department: Option<String>,
    #[serde(rename = "Rank")]
    rank: String,
    #[serde(rename = "Years", default)]
    years: u32,
    #[serde(rename = "Publications", default)]
    publications: u32,
    #[serde(rename = "Conferences", default)]
    conferences: u32,
    #[serde(rename = "Books", default)]
    books: u32,
    #[serde(rename = "PhD", default, deserialize_with = "flexible_bool")]
    phd: bool,
}

impl RosterRow {
    fn into_profile(self) -> FacultyProfile {
        let mut profile = FacultyProfile::new(AccountId(self.account), self.name);
        profile.department = self.department;
        profile.current_rank = AcademicRank::from_label(&self.rank);
        profile.record = ScholarlyRecord {
            years_of_experience: self.years,
            publications: self.publications,
            conferences_attended: self.conferences,
            books_published: self.books,
            phd_completed: self.phd,
        };
        profile.recalculate_score();
        profile
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" | "" => Ok(false),
        other => Err(de::Error::custom(format!(
            "expected yes/no for PhD, found '{other}'"
        ))),
    }
}
