use crate::membership_type::MembershipType;
use chrono::{NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A gym member as stored and served by the API.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Member {
    id: i32,
    full_name: String,
    email: String,
    phone: Option<String>,
    subscription_due_date: NaiveDate,
    birthday: Option<NaiveDate>,
    last_checkin_date: Option<NaiveDate>,
    membership_type: MembershipType,
    is_active: bool,
    created_at: NaiveDateTime,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        full_name: String,
        email: String,
        phone: Option<String>,
        subscription_due_date: NaiveDate,
        birthday: Option<NaiveDate>,
        last_checkin_date: Option<NaiveDate>,
        membership_type: MembershipType,
        is_active: bool,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            full_name,
            email,
            phone,
            subscription_due_date,
            birthday,
            last_checkin_date,
            membership_type,
            is_active,
            created_at,
        }
    }

    /// First word of the full name, used as the salutation in emails.
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.full_name)
    }
}

/// A member to create, as accepted by the API and the bulk import.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct NewMember {
    full_name: String,
    email: String,
    phone: Option<String>,
    subscription_due_date: NaiveDate,
    birthday: Option<NaiveDate>,
    last_checkin_date: Option<NaiveDate>,
    #[serde(default)]
    membership_type: MembershipType,
    #[serde(default = "default_is_active")]
    is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl NewMember {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        full_name: String,
        email: String,
        phone: Option<String>,
        subscription_due_date: NaiveDate,
        birthday: Option<NaiveDate>,
        last_checkin_date: Option<NaiveDate>,
        membership_type: MembershipType,
        is_active: bool,
    ) -> Self {
        Self {
            full_name,
            email,
            phone,
            subscription_due_date,
            birthday,
            last_checkin_date,
            membership_type,
            is_active,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl Member {
        /// A plain active member with the given due date; everything else defaulted.
        pub fn new_test(id: i32, email: &str, subscription_due_date: NaiveDate) -> Self {
            Member {
                id,
                full_name: "Jane Doe".to_string(),
                email: email.to_string(),
                phone: None,
                subscription_due_date,
                birthday: None,
                last_checkin_date: None,
                membership_type: MembershipType::Basic,
                is_active: true,
                created_at: subscription_due_date.and_hms_opt(9, 0, 0).unwrap(),
            }
        }

        pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
            self.birthday = Some(birthday);
            self
        }

        pub fn with_last_checkin_date(mut self, last_checkin_date: NaiveDate) -> Self {
            self.last_checkin_date = Some(last_checkin_date);
            self
        }

        pub fn deactivated(mut self) -> Self {
            self.is_active = false;
            self
        }
    }

    #[test]
    fn should_extract_first_name() {
        let member = Member::new_test(
            1,
            "jane@example.com",
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
        );
        assert_eq!("Jane", member.first_name());
    }

    #[test]
    fn should_fall_back_to_full_name_when_single_word() {
        let mut member = Member::new_test(
            1,
            "cher@example.com",
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
        );
        member.full_name = "Cher".to_string();
        assert_eq!("Cher", member.first_name());
    }
}
