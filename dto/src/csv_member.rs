use crate::member::NewMember;
use crate::membership_type::MembershipType;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Result of a bulk import: how many members were created,
/// plus one message per rejected row.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct ImportSummary {
    created: u32,
    errors: Vec<String>,
}

impl ImportSummary {
    pub fn new(created: u32, errors: Vec<String>) -> Self {
        Self { created, errors }
    }
}

/// One row of a bulk-import CSV file, as written by the staff spreadsheet
/// export: `full_name,email,phone,subscription_due_date,membership_type,
/// is_active,birthday,last_checkin_date`. Optional columns may be empty.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct CsvMemberRow {
    full_name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    subscription_due_date: String,
    #[serde(default)]
    membership_type: Option<String>,
    #[serde(default)]
    is_active: Option<bool>,
    #[serde(default)]
    birthday: Option<String>,
    #[serde(default)]
    last_checkin_date: Option<String>,
}

impl TryFrom<CsvMemberRow> for NewMember {
    type Error = String;

    fn try_from(row: CsvMemberRow) -> Result<Self, Self::Error> {
        let subscription_due_date = parse_date(&row.subscription_due_date)?;
        let birthday = parse_optional_date(row.birthday.as_deref())?;
        let last_checkin_date = parse_optional_date(row.last_checkin_date.as_deref())?;
        let membership_type = match row.membership_type.as_deref() {
            None | Some("") => MembershipType::default(),
            Some(value) => MembershipType::from_str(value)?,
        };

        Ok(NewMember::new(
            row.full_name,
            row.email,
            row.phone.filter(|phone| !phone.is_empty()),
            subscription_due_date,
            birthday,
            last_checkin_date,
            membership_type,
            row.is_active.unwrap_or(true),
        ))
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::from_str(value).map_err(|_| format!("Invalid date: {value}"))
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match value {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}
