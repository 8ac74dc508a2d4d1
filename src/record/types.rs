//! Types representing the personal-history record loaded from JSON

use std::fmt;

use serde::Deserialize;

/// The full CV record. Loaded once at the start of a generation run and
/// never mutated afterwards; every list renders in the order it appears
/// on the wire.
#[derive(Debug, Deserialize)]
pub struct CvRecord {
    pub personal: Personal,
    pub experience: Vec<Job>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub publications: Vec<Publication>,
    pub awards: Vec<Award>,
    pub hobbies: Vec<Hobby>,
}

#[derive(Debug, Deserialize)]
pub struct Personal {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub social: Vec<SocialLink>,
}

/// A link shown in the contact block. The url is a link target and the
/// icon is a glyph class; neither is prose, so renderers insert them
/// verbatim.
#[derive(Debug, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// One employment entry. The dates are opaque display text, never parsed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub icon: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub years: String,
    pub details: Option<Vec<Detail>>,
}

#[derive(Debug, Deserialize)]
pub struct Detail {
    pub subject: String,
    pub grade: String,
}

#[derive(Debug, Deserialize)]
pub struct Publication {
    pub authors: String,
    pub year: Year,
    pub title: String,
    pub venue: String,
    pub doi: Option<String>,
}

/// Publication years are usually numbers, but strings such as "in press"
/// occur in the wild, so accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(number) => write!(f, "{}", number),
            Year::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Award {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct Hobby {
    pub name: String,
    pub icon: String,
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn job_fields_are_camel_case_on_the_wire() {
        let job: Job = serde_json::from_str(
            r#"{
                "title": "Engineer",
                "company": "Acme",
                "location": "Remote",
                "startDate": "Jan 2020",
                "endDate": "Present",
                "icon": "fas fa-code",
                "highlights": ["Built the thing"]
            }"#,
        )
        .unwrap();

        assert_eq!(job.start_date, "Jan 2020");
        assert_eq!(job.end_date, "Present");
    }

    #[test]
    fn year_accepts_numbers_and_strings() {
        let number: Year = serde_json::from_str("2021").unwrap();
        assert_eq!(number.to_string(), "2021");

        let text: Year = serde_json::from_str(r#""in press""#).unwrap();
        assert_eq!(text.to_string(), "in press");
    }

    #[test]
    fn education_details_are_optional() {
        let entry: EducationEntry = serde_json::from_str(
            r#"{
                "degree": "BSc Computer Science",
                "institution": "University of Somewhere",
                "years": "2014 - 2017"
            }"#,
        )
        .unwrap();

        assert!(entry
            .details
            .is_none());
    }

    #[test]
    fn publication_doi_is_optional() {
        let publication: Publication = serde_json::from_str(
            r#"{
                "authors": "Lovelace, A.",
                "year": 1843,
                "title": "Notes on the Analytical Engine",
                "venue": "Scientific Memoirs"
            }"#,
        )
        .unwrap();

        assert!(publication
            .doi
            .is_none());
    }
}
