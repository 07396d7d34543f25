use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    #[default]
    Basic,
    Premium,
    Vip,
    Student,
}

impl Display for MembershipType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipType::Basic => write!(f, "basic"),
            MembershipType::Premium => write!(f, "premium"),
            MembershipType::Vip => write!(f, "vip"),
            MembershipType::Student => write!(f, "student"),
        }
    }
}

impl FromStr for MembershipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(MembershipType::Basic),
            "premium" => Ok(MembershipType::Premium),
            "vip" => Ok(MembershipType::Vip),
            "student" => Ok(MembershipType::Student),
            _ => Err(format!("Unknown membership type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        membership_type = { MembershipType::Basic, MembershipType::Premium, MembershipType::Vip, MembershipType::Student }
    )]
    fn should_round_trip_through_display(membership_type: MembershipType) {
        let result = MembershipType::from_str(&membership_type.to_string()).unwrap();
        assert_eq!(membership_type, result);
    }

    #[test]
    fn should_fail_to_parse_unknown_type() {
        assert!(MembershipType::from_str("gold").is_err());
    }
}
