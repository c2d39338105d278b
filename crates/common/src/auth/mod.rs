//! Actor identity and role checks
//!
//! The transport layer authenticates callers (token mechanics live outside
//! this workspace) and hands the core a trusted [`Actor`] assertion: who is
//! calling, in which role, and which profile they own. Everything below the
//! transport trusts this struct and nothing else.

use crate::db::models::Owner;
use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller role as asserted by the identity layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Faculty,
    Student,
    Admin,
}

/// Authenticated caller context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// External identity-record id
    pub user_id: Uuid,

    pub role: Role,

    /// Owned faculty/student profile; None for administrators
    pub profile_id: Option<Uuid>,
}

impl Actor {
    pub fn faculty(user_id: Uuid, profile_id: Uuid) -> Self {
        Self {
            user_id,
            role: Role::Faculty,
            profile_id: Some(profile_id),
        }
    }

    pub fn student(user_id: Uuid, profile_id: Uuid) -> Self {
        Self {
            user_id,
            role: Role::Student,
            profile_id: Some(profile_id),
        }
    }

    pub fn admin(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: Role::Admin,
            profile_id: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Require the administrator role, returning the admin's identity id
    pub fn require_admin(&self) -> Result<Uuid> {
        if self.is_admin() {
            Ok(self.user_id)
        } else {
            Err(AppError::Unauthorized {
                message: "administrator role required".to_string(),
            })
        }
    }

    /// The record owner this actor submits as.
    ///
    /// Administrators do not own records and cannot act as submitters.
    pub fn owner(&self) -> Result<Owner> {
        let profile_id = self.profile_id.ok_or_else(|| AppError::Unauthorized {
            message: "actor has no owned profile".to_string(),
        })?;

        match self.role {
            Role::Faculty => Ok(Owner::Faculty(profile_id)),
            Role::Student => Ok(Owner::Student(profile_id)),
            Role::Admin => Err(AppError::Unauthorized {
                message: "administrators cannot submit records".to_string(),
            }),
        }
    }

    /// The faculty profile this actor owns, for faculty-only operations
    pub fn faculty_profile(&self) -> Result<Uuid> {
        match (self.role, self.profile_id) {
            (Role::Faculty, Some(id)) => Ok(id),
            _ => Err(AppError::Unauthorized {
                message: "faculty role required".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_admin() {
        let admin = Actor::admin(Uuid::new_v4());
        assert_eq!(admin.require_admin().unwrap(), admin.user_id);

        let faculty = Actor::faculty(Uuid::new_v4(), Uuid::new_v4());
        assert!(faculty.require_admin().is_err());
    }

    #[test]
    fn test_owner_mapping() {
        let profile = Uuid::new_v4();

        let faculty = Actor::faculty(Uuid::new_v4(), profile);
        assert_eq!(faculty.owner().unwrap(), Owner::Faculty(profile));

        let student = Actor::student(Uuid::new_v4(), profile);
        assert_eq!(student.owner().unwrap(), Owner::Student(profile));

        let admin = Actor::admin(Uuid::new_v4());
        assert!(admin.owner().is_err());
    }

    #[test]
    fn test_faculty_profile_requires_faculty_role() {
        let profile = Uuid::new_v4();
        assert!(Actor::faculty(Uuid::new_v4(), profile).faculty_profile().is_ok());
        assert!(Actor::student(Uuid::new_v4(), profile).faculty_profile().is_err());
        assert!(Actor::admin(Uuid::new_v4()).faculty_profile().is_err());
    }
}
