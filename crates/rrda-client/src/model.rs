//! DNS answer types returned by the RRDA API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A query echoed back in the question section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// The queried name, usually fully qualified (`example.com.`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Record type mnemonic, e.g. `A` or `MX`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub record_type: String,

    /// Class mnemonic, e.g. `IN`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: String,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ";{}\t{}\t{}", self.name, self.class, self.record_type)
    }
}

/// A single resource record from the answer, authority or additional section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Owner name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Record type mnemonic.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub record_type: String,

    /// Class mnemonic.
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: String,

    /// Time to live in seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ttl: u32,

    /// Length of the raw record data in bytes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rdlength: u16,

    /// Record data in presentation format. Its layout depends on the record
    /// type and is passed through untouched.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rdata: String,
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.class, self.record_type, self.rdata
        )
    }
}

/// The record sections of an [`Answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Records answering the question.
    Answer,
    /// Records pointing toward an authoritative name server.
    Authority,
    /// Records that relate to the query but are not strictly answers.
    Additional,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answer => write!(f, "ANSWER"),
            Self::Authority => write!(f, "AUTHORITY"),
            Self::Additional => write!(f, "ADDITIONAL"),
        }
    }
}

/// A decoded RRDA response.
///
/// Every section is always present; sections missing from the response are
/// empty. Record order within each section is preserved as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Questions echoed by the service.
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: Vec<Question>,

    /// Answer section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: Vec<ResourceRecord>,

    /// Authority section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub authority: Vec<ResourceRecord>,

    /// Additional section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional: Vec<ResourceRecord>,
}

impl Answer {
    /// Check if no section carries any record.
    ///
    /// The question section is not considered; NXDOMAIN responses echo the
    /// question but carry no records.
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty() && self.authority.is_empty() && self.additional.is_empty()
    }

    /// Check if the answer section carries any record.
    pub fn has_answers(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Get the first echoed question, if any.
    pub fn first_question(&self) -> Option<&Question> {
        self.question.first()
    }

    /// Get the records of one section.
    pub fn section(&self, section: Section) -> &[ResourceRecord] {
        match section {
            Section::Answer => &self.answer,
            Section::Authority => &self.authority,
            Section::Additional => &self.additional,
        }
    }

    /// Iterate over all records, answer section first, then authority, then
    /// additional.
    pub fn records(&self) -> impl Iterator<Item = (Section, &ResourceRecord)> {
        [Section::Answer, Section::Authority, Section::Additional]
            .into_iter()
            .flat_map(move |section| self.section(section).iter().map(move |rr| (section, rr)))
    }

    /// Iterate over the rdata of the answer section.
    pub fn answer_rdata(&self) -> impl Iterator<Item = &str> {
        self.answer.iter().map(|rr| rr.rdata.as_str())
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ";; QUESTION SECTION:")?;
        for question in &self.question {
            writeln!(f, "{question}")?;
        }

        for section in [Section::Answer, Section::Authority, Section::Additional] {
            let records = self.section(section);
            if records.is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, ";; {section} SECTION:")?;
            for record in records {
                writeln!(f, "{record}")?;
            }
        }
        Ok(())
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
