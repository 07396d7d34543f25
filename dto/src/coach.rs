use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Coach {
    id: i32,
    full_name: String,
    email: String,
    phone: Option<String>,
    specialization: Option<String>,
    is_available: bool,
}

impl Coach {
    pub fn new(
        id: i32,
        full_name: String,
        email: String,
        phone: Option<String>,
        specialization: Option<String>,
        is_available: bool,
    ) -> Self {
        Self {
            id,
            full_name,
            email,
            phone,
            specialization,
            is_available,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct NewCoach {
    full_name: String,
    email: String,
    phone: Option<String>,
    specialization: Option<String>,
    #[serde(default = "default_is_available")]
    is_available: bool,
}

fn default_is_available() -> bool {
    true
}

impl NewCoach {
    pub fn new(
        full_name: String,
        email: String,
        phone: Option<String>,
        specialization: Option<String>,
        is_available: bool,
    ) -> Self {
        Self {
            full_name,
            email,
            phone,
            specialization,
            is_available,
        }
    }
}
