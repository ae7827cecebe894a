//! The declarative access request.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::directive::DirectiveMap;

/// One declarative access-control request: allow these users/groups to reach
/// ssh on the requesting resource from this set of hosts, with these extra
/// sshd directives.
///
/// Immutable once constructed. Subject and host lists are ordered sequences;
/// compilation iterates them in the given order, so identical requests
/// compile to identical rule sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessRequest {
    name: String,
    hostlist: Vec<String>,
    users: Vec<String>,
    groups: Vec<String>,
    #[serde(default)]
    sshd_overrides: DirectiveMap,
}

impl AccessRequest {
    /// Validate and construct a request.
    ///
    /// Fails when the hostlist is empty, when any hostlist entry is the
    /// empty string, or when `users` and `groups` are both empty.
    pub fn new(
        name: impl Into<String>,
        hostlist: impl IntoIterator<Item = impl Into<String>>,
        users: impl IntoIterator<Item = impl Into<String>>,
        groups: impl IntoIterator<Item = impl Into<String>>,
        sshd_overrides: DirectiveMap,
    ) -> Result<Self, ValidationError> {
        let hostlist: Vec<String> = hostlist.into_iter().map(Into::into).collect();
        let users: Vec<String> = users.into_iter().map(Into::into).collect();
        let groups: Vec<String> = groups.into_iter().map(Into::into).collect();

        if hostlist.is_empty() {
            return Err(ValidationError::EmptyHostList);
        }
        if let Some(index) = hostlist.iter().position(|host| host.is_empty()) {
            return Err(ValidationError::EmptyHostEntry(index));
        }
        if users.is_empty() && groups.is_empty() {
            return Err(ValidationError::NoSubjects);
        }

        Ok(AccessRequest {
            name: name.into(),
            hostlist,
            users,
            groups,
            sshd_overrides,
        })
    }

    /// The requesting resource name; firewall rule labels are keyed by it.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hostlist(&self) -> &[String] {
        &self.hostlist
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn sshd_overrides(&self) -> &DirectiveMap {
        &self.sshd_overrides
    }
}
