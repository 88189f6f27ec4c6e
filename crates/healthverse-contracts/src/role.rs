//! User roles.
//!
//! `Role::Unset` is an explicit variant rather than a nullable field so every
//! `match` over a role has to decide what an unrouted session does.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{error::HealthverseError, screen::Screen};

/// The role a session acts under.
///
/// A freshly authenticated session is `Unset` until the user picks one of the
/// three concrete roles on the role-selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Unset,
    Patient,
    Doctor,
    Pharmacy,
}

impl Role {
    /// The three roles a session can be routed to, in display order.
    pub const CONCRETE: [Role; 3] = [Role::Patient, Role::Doctor, Role::Pharmacy];

    /// Wire name of a concrete role; `None` for `Unset`.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Role::Unset => None,
            Role::Patient => Some("patient"),
            Role::Doctor => Some("doctor"),
            Role::Pharmacy => Some("pharmacy"),
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Role::Unset)
    }

    /// The screen a session holding this role lands on.
    ///
    /// Unrouted sessions belong on role selection.
    pub fn dashboard(&self) -> Screen {
        match self {
            Role::Unset => Screen::RoleSelection,
            Role::Patient => Screen::PatientDashboard,
            Role::Doctor => Screen::DoctorDashboard,
            Role::Pharmacy => Screen::PharmacyDashboard,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("unset"))
    }
}

impl FromStr for Role {
    type Err = HealthverseError;

    /// Parse a concrete role name. `"unset"` and anything else is rejected:
    /// no caller is allowed to name the unrouted state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            "pharmacy" => Ok(Role::Pharmacy),
            other => Err(HealthverseError::UnknownRole {
                value: other.to_string(),
            }),
        }
    }
}

// The persisted record stores an unset role as JSON `null`.

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Role::Unset),
            Some(name) => name.parse().map_err(de::Error::custom),
        }
    }
}
