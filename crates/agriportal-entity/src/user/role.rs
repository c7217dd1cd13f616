//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to portal accounts.
///
/// `Admin` can never be self-assigned at signup; it is reserved for
/// out-of-band provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A farmer managing land, crops, and documents.
    Farmer,
    /// A produce buyer.
    Buyer,
    /// Full administrator.
    Admin,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Buyer => "buyer",
            Self::Admin => "admin",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Farmer
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = agriportal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "farmer" => Ok(Self::Farmer),
            "buyer" => Ok(Self::Buyer),
            "admin" => Ok(Self::Admin),
            _ => Err(agriportal_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: farmer, buyer, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("farmer".parse::<UserRole>().unwrap(), UserRole::Farmer);
        assert_eq!("BUYER".parse::<UserRole>().unwrap(), UserRole::Buyer);
        assert!("landlord".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_default_is_farmer() {
        assert_eq!(UserRole::default(), UserRole::Farmer);
    }

    #[test]
    fn test_admin_detection() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Farmer.is_admin());
    }
}
