//! Route catalog consumed by the access gate.
//!
//! Every navigable path of the two consoles maps to exactly one [`AppRoute`],
//! and every route belongs to one [`RouteClass`]. Paths that match nothing are
//! not part of the catalog and resolve to `None`.

use cableflow_core::Role;
use serde::{Deserialize, Serialize};

/// Authorization class of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
    /// Reachable without a session (sign-in page).
    Public,
    /// The root path; only dispatches to the caller's home.
    Index,
    /// Administrative console.
    AdministratorOnly,
    /// Subscriber self-service console.
    SubscriberOnly,
}

impl RouteClass {
    /// Returns the gate requirement for this class, or `None` for public routes.
    #[must_use]
    pub fn requirement(&self) -> Option<RouteRequirement> {
        match self {
            Self::Public => None,
            Self::Index => Some(RouteRequirement::AnyRole),
            Self::AdministratorOnly => Some(RouteRequirement::Role(Role::Administrator)),
            Self::SubscriberOnly => Some(RouteRequirement::Role(Role::Subscriber)),
        }
    }
}

/// What the gate checks before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteRequirement {
    /// Any authenticated principal; used by the root dispatch.
    AnyRole,
    /// An authenticated principal holding exactly this role.
    Role(Role),
}

/// Redirect target chosen by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "role")]
pub enum Destination {
    /// The sign-in page.
    SignIn,
    /// The landing page of a role's console.
    Home(Role),
}

impl Destination {
    /// Returns the home destination of the given role.
    #[must_use]
    pub fn home_for(role: Role) -> Self {
        Self::Home(role)
    }

    /// Returns the path the router navigates to.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::SignIn => SIGN_IN_PATH,
            Self::Home(Role::Administrator) => ADMINISTRATOR_HOME_PATH,
            Self::Home(Role::Subscriber) => SUBSCRIBER_HOME_PATH,
        }
    }
}

/// Path of the sign-in page.
pub const SIGN_IN_PATH: &str = "/login";

/// Path of the administrative console landing page.
pub const ADMINISTRATOR_HOME_PATH: &str = "/admin";

/// Path of the subscriber console landing page.
pub const SUBSCRIBER_HOME_PATH: &str = "/member";

/// Known routes of both consoles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "route")]
pub enum AppRoute {
    /// `/`
    Root,
    /// `/login`
    SignIn,
    /// `/admin`
    AdminDashboard,
    /// `/admin/members`
    AdminMembers,
    /// `/admin/members/add`
    AdminAddMember,
    /// `/admin/members/{member_id}`
    AdminMemberDetail {
        /// Member identifier taken from the path.
        member_id: String,
    },
    /// `/admin/recharge`
    AdminRecharge,
    /// `/admin/reports`
    AdminReports,
    /// `/admin/settings`
    AdminSettings,
    /// `/member`
    SubscriberDashboard,
    /// `/member/plan`
    SubscriberPlan,
    /// `/member/payments`
    SubscriberPayments,
    /// `/member/recharge`
    SubscriberRecharge,
}

impl AppRoute {
    /// Resolves a request path against the catalog.
    ///
    /// Query strings and fragments are ignored, as are trailing and repeated
    /// slashes. Returns `None` when no route matches.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Self::Root,
            ["login"] => Self::SignIn,
            ["admin"] => Self::AdminDashboard,
            ["admin", "members"] => Self::AdminMembers,
            ["admin", "members", "add"] => Self::AdminAddMember,
            ["admin", "members", member_id] => Self::AdminMemberDetail {
                member_id: (*member_id).to_owned(),
            },
            ["admin", "recharge"] => Self::AdminRecharge,
            ["admin", "reports"] => Self::AdminReports,
            ["admin", "settings"] => Self::AdminSettings,
            ["member"] => Self::SubscriberDashboard,
            ["member", "plan"] => Self::SubscriberPlan,
            ["member", "payments"] => Self::SubscriberPayments,
            ["member", "recharge"] => Self::SubscriberRecharge,
            _ => return None,
        };

        Some(route)
    }

    /// Returns the authorization class of this route.
    #[must_use]
    pub fn class(&self) -> RouteClass {
        match self {
            Self::Root => RouteClass::Index,
            Self::SignIn => RouteClass::Public,
            Self::AdminDashboard
            | Self::AdminMembers
            | Self::AdminAddMember
            | Self::AdminMemberDetail { .. }
            | Self::AdminRecharge
            | Self::AdminReports
            | Self::AdminSettings => RouteClass::AdministratorOnly,
            Self::SubscriberDashboard
            | Self::SubscriberPlan
            | Self::SubscriberPayments
            | Self::SubscriberRecharge => RouteClass::SubscriberOnly,
        }
    }

    /// Returns the canonical path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_owned(),
            Self::SignIn => SIGN_IN_PATH.to_owned(),
            Self::AdminDashboard => ADMINISTRATOR_HOME_PATH.to_owned(),
            Self::AdminMembers => "/admin/members".to_owned(),
            Self::AdminAddMember => "/admin/members/add".to_owned(),
            Self::AdminMemberDetail { member_id } => format!("/admin/members/{member_id}"),
            Self::AdminRecharge => "/admin/recharge".to_owned(),
            Self::AdminReports => "/admin/reports".to_owned(),
            Self::AdminSettings => "/admin/settings".to_owned(),
            Self::SubscriberDashboard => SUBSCRIBER_HOME_PATH.to_owned(),
            Self::SubscriberPlan => "/member/plan".to_owned(),
            Self::SubscriberPayments => "/member/payments".to_owned(),
            Self::SubscriberRecharge => "/member/recharge".to_owned(),
        }
    }
}
