// src/domain/user/policy.rs
use crate::domain::user::value_objects::{ApprovalStatus, Role};

/// Roles allowed to call a route and whether they must be approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    pub roles: &'static [Role],
    pub require_approval: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    RoleNotPermitted,
    ApprovalRequired,
}

impl AccessPolicy {
    /// Writing and editing articles.
    pub const ARTICLE_AUTHORING: AccessPolicy = AccessPolicy {
        roles: &[Role::Editor, Role::Admin],
        require_approval: true,
    };

    /// Newsroom listings; pending journalists may look but not publish.
    pub const NEWSROOM: AccessPolicy = AccessPolicy {
        roles: &[Role::Editor, Role::Admin],
        require_approval: false,
    };

    pub const ADMIN_ONLY: AccessPolicy = AccessPolicy {
        roles: &[Role::Admin],
        require_approval: false,
    };

    pub fn evaluate(&self, role: Role, status: ApprovalStatus) -> Result<(), AccessDenied> {
        if !self.roles.contains(&role) {
            return Err(AccessDenied::RoleNotPermitted);
        }
        if self.require_approval && role != Role::Admin && status != ApprovalStatus::Approved {
            return Err(AccessDenied::ApprovalRequired);
        }
        Ok(())
    }
}
