use super::*;
use crate::net::types::User;
use crate::state::auth::Session;

fn signed_in(role: Role) -> AuthState {
    let mut state = AuthState::default();
    state.sign_in(Session {
        user: User { id: 1, name: "U".to_owned(), email: "u@example.com".to_owned(), username: None, role },
        access: "acc".to_owned(),
        refresh: "ref".to_owned(),
    });
    state
}

#[test]
fn pending_while_restoring() {
    assert_eq!(check_access(&AuthState::restoring(), &[Role::Admin]), Access::Pending);
}

#[test]
fn unauthenticated_visit_to_any_gated_page_redirects_to_landing() {
    let state = AuthState::default();
    for page in ProtectedPage::ALL {
        assert_eq!(page.check(&state), Access::Redirect("/landing"), "page {page:?}");
    }
}

#[test]
fn employer_on_seeker_only_page_is_redirected() {
    assert_eq!(
        ProtectedPage::SeekerDashboard.check(&signed_in(Role::Employer)),
        Access::Redirect(FALLBACK_PATH)
    );
}

#[test]
fn seeker_on_own_dashboard_is_allowed() {
    assert_eq!(ProtectedPage::SeekerDashboard.check(&signed_in(Role::JobSeeker)), Access::Allow);
}

#[test]
fn admin_only_admin_page() {
    assert_eq!(ProtectedPage::Admin.check(&signed_in(Role::Admin)), Access::Allow);
    assert_eq!(ProtectedPage::Admin.check(&signed_in(Role::JobSeeker)), Access::Redirect(FALLBACK_PATH));
    assert_eq!(ProtectedPage::Jobs.check(&signed_in(Role::Admin)), Access::Redirect(FALLBACK_PATH));
}

#[test]
fn empty_allow_list_admits_any_signed_in_user() {
    assert_eq!(check_access(&signed_in(Role::Employer), &[]), Access::Allow);
    assert_eq!(check_access(&AuthState::default(), &[]), Access::Redirect(FALLBACK_PATH));
}

#[test]
fn every_role_home_path_is_reachable_for_that_role() {
    for role in [Role::JobSeeker, Role::Employer, Role::Admin] {
        let page = ProtectedPage::ALL
            .into_iter()
            .find(|p| p.path() == role.home_path())
            .expect("home path is a protected page");
        assert_eq!(page.check(&signed_in(role)), Access::Allow);
    }
}
