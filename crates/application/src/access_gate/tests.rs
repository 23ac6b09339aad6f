use std::sync::Arc;

use async_trait::async_trait;
use cableflow_core::{AppResult, Role, UserIdentity};
use cableflow_domain::{AppRoute, Capabilities, Destination, RouteRequirement};
use tokio::sync::Mutex;

use crate::{CredentialVerifier, SessionBlobStore, SessionService, SessionSettings};

use super::{
    AccessDecision, AccessGate, AccessState, NavigationOutcome, access_state, evaluate_access,
    index_destination,
};

#[derive(Default)]
struct FakeBlobStore {
    blob: Mutex<Option<String>>,
}

#[async_trait]
impl SessionBlobStore for FakeBlobStore {
    async fn read(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(self.blob.lock().await.clone())
    }

    async fn write(&self, _key: &str, blob: &str) -> AppResult<()> {
        *self.blob.lock().await = Some(blob.to_owned());
        Ok(())
    }

    async fn remove(&self, _key: &str) -> AppResult<()> {
        *self.blob.lock().await = None;
        Ok(())
    }
}

struct FakeVerifier;

#[async_trait]
impl CredentialVerifier for FakeVerifier {
    async fn verify(&self, email: &str, _password: &str) -> AppResult<UserIdentity> {
        let role = if email.starts_with("admin") {
            Role::Administrator
        } else {
            Role::Subscriber
        };
        Ok(UserIdentity::new("42", "Tester", email, role))
    }
}

fn administrator() -> UserIdentity {
    UserIdentity::new("1", "Admin User", "admin@example.com", Role::Administrator)
}

fn subscriber() -> UserIdentity {
    UserIdentity::new("2", "Member User", "jane@example.com", Role::Subscriber)
}

fn gate() -> (AccessGate, SessionService) {
    let session_service = SessionService::new(
        Arc::new(FakeBlobStore::default()),
        Arc::new(FakeVerifier),
        SessionSettings::default(),
    );
    (AccessGate::new(session_service.clone()), session_service)
}

const ADMIN_ONLY: RouteRequirement = RouteRequirement::Role(Role::Administrator);
const SUBSCRIBER_ONLY: RouteRequirement = RouteRequirement::Role(Role::Subscriber);

#[test]
fn empty_session_is_sent_to_sign_in() {
    assert_eq!(access_state(None, ADMIN_ONLY), AccessState::Unauthenticated);
    assert_eq!(
        evaluate_access(None, ADMIN_ONLY),
        AccessDecision::Redirect(Destination::SignIn)
    );
    assert_eq!(
        evaluate_access(None, SUBSCRIBER_ONLY),
        AccessDecision::Redirect(Destination::SignIn)
    );
}

#[test]
fn subscriber_on_admin_route_is_sent_home() {
    let identity = subscriber();
    assert_eq!(
        access_state(Some(&identity), ADMIN_ONLY),
        AccessState::AuthenticatedWrongRole
    );
    assert_eq!(
        evaluate_access(Some(&identity), ADMIN_ONLY),
        AccessDecision::Redirect(Destination::Home(Role::Subscriber))
    );
}

#[test]
fn administrator_on_admin_route_renders() {
    let identity = administrator();
    assert_eq!(
        access_state(Some(&identity), ADMIN_ONLY),
        AccessState::Authorized
    );
    assert_eq!(
        evaluate_access(Some(&identity), ADMIN_ONLY),
        AccessDecision::Render
    );
}

#[test]
fn administrator_on_subscriber_route_is_sent_home() {
    let identity = administrator();
    assert_eq!(
        evaluate_access(Some(&identity), SUBSCRIBER_ONLY),
        AccessDecision::Redirect(Destination::Home(Role::Administrator))
    );
}

#[test]
fn any_role_requirement_only_needs_a_session() {
    assert_eq!(
        evaluate_access(Some(&subscriber()), RouteRequirement::AnyRole),
        AccessDecision::Render
    );
    assert_eq!(
        evaluate_access(None, RouteRequirement::AnyRole),
        AccessDecision::Redirect(Destination::SignIn)
    );
}

#[test]
fn role_requirements_follow_the_capability_flags() {
    for identity in [administrator(), subscriber()] {
        let capabilities = Capabilities::for_identity(Some(&identity));
        for required in [Role::Administrator, Role::Subscriber] {
            let expected = if capabilities.holds(required) {
                AccessState::Authorized
            } else {
                AccessState::AuthenticatedWrongRole
            };
            assert_eq!(
                access_state(Some(&identity), RouteRequirement::Role(required)),
                expected
            );
        }
    }
}

#[test]
fn index_dispatches_by_role() {
    assert_eq!(index_destination(None), Destination::SignIn);
    assert_eq!(
        index_destination(Some(&administrator())),
        Destination::Home(Role::Administrator)
    );
    assert_eq!(
        index_destination(Some(&subscriber())),
        Destination::Home(Role::Subscriber)
    );
}

#[tokio::test]
async fn navigation_follows_the_session_lifecycle() {
    let (gate, session_service) = gate();

    assert_eq!(
        gate.navigate("/"),
        NavigationOutcome::Redirect(Destination::SignIn)
    );
    assert_eq!(
        gate.navigate("/admin/members"),
        NavigationOutcome::Redirect(Destination::SignIn)
    );
    assert_eq!(
        gate.navigate("/login"),
        NavigationOutcome::Render(AppRoute::SignIn)
    );

    assert!(
        session_service
            .sign_in("admin@example.com", "pw")
            .await
            .is_ok()
    );
    assert!(gate.capabilities().is_administrator);
    assert_eq!(
        gate.navigate("/"),
        NavigationOutcome::Redirect(Destination::Home(Role::Administrator))
    );
    assert_eq!(
        gate.navigate("/admin/members/MEM002"),
        NavigationOutcome::Render(AppRoute::AdminMemberDetail {
            member_id: "MEM002".to_owned()
        })
    );
    assert_eq!(
        gate.navigate("/member/payments"),
        NavigationOutcome::Redirect(Destination::Home(Role::Administrator))
    );

    session_service.sign_out().await;
    assert_eq!(
        gate.navigate("/admin/members/MEM002"),
        NavigationOutcome::Redirect(Destination::SignIn)
    );
}

#[tokio::test]
async fn subscriber_navigation_stays_in_the_subscriber_console() {
    let (gate, session_service) = gate();
    assert!(
        session_service
            .sign_in("jane@example.com", "pw")
            .await
            .is_ok()
    );

    assert_eq!(
        gate.navigate("/member/plan"),
        NavigationOutcome::Render(AppRoute::SubscriberPlan)
    );
    assert_eq!(
        gate.navigate("/admin/reports"),
        NavigationOutcome::Redirect(Destination::Home(Role::Subscriber))
    );
    assert_eq!(
        gate.navigate("/"),
        NavigationOutcome::Redirect(Destination::Home(Role::Subscriber))
    );
}

#[test]
fn unknown_paths_are_not_found_regardless_of_session() {
    let (gate, _) = gate();
    assert_eq!(gate.navigate("/admin/billing"), NavigationOutcome::NotFound);
    assert_eq!(gate.navigate("/nowhere"), NavigationOutcome::NotFound);
}
