//! Hash Router
//!
//! Route parsing plus the pure transition function that decides between the
//! auth screens and the dashboard pages. The effectful shell (hashchange
//! subscription, hash assignment, storage clearing) lives with the caller so
//! transitions stay unit-testable.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::state::session::Role;

/// A location the URL hash can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Expenses,
    Approvals,
    Users,
}

impl Route {
    /// Parse a `window.location.hash` value. Unknown hashes land on the
    /// dashboard, mirroring the page fallthrough.
    pub fn from_hash(hash: &str) -> Self {
        match hash {
            "#login" => Route::Login,
            "#signup" => Route::Signup,
            "#expenses" => Route::Expenses,
            "#approvals" => Route::Approvals,
            "#users" => Route::Users,
            _ => Route::Dashboard,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Route::Login => "#login",
            Route::Signup => "#signup",
            Route::Dashboard => "#dashboard",
            Route::Expenses => "#expenses",
            Route::Approvals => "#approvals",
            Route::Users => "#users",
        }
    }

    /// Routes rendered by the auth screen rather than the dashboard.
    pub fn is_auth(&self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }
}

/// Which auth form to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScreen {
    Login,
    Signup,
}

/// Dashboard page keys after role gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Expenses,
    Approvals,
    Users,
}

/// Result of one routing transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Show an auth form; the caller clears the session first.
    Auth(AuthScreen),
    /// Reassign the hash and let the change re-enter the router.
    Redirect(Route),
    /// Render the dashboard layout with the given page.
    Dashboard(Page),
}

/// Decide what a hash change means given the stored credential and the role
/// decoded from it.
pub fn resolve(route: Route, has_token: bool, role: Option<Role>) -> Outcome {
    if !has_token || route.is_auth() {
        let screen = if route == Route::Signup {
            AuthScreen::Signup
        } else {
            AuthScreen::Login
        };
        return Outcome::Auth(screen);
    }

    let Some(role) = role else {
        // Credential present but undecodable; the session layer has already
        // cleared it and forced `#login`.
        return Outcome::Auth(AuthScreen::Login);
    };

    // Non-employees have no dashboard landing page of their own.
    if role != Role::Employee && route == Route::Dashboard {
        return Outcome::Redirect(Route::Approvals);
    }

    Outcome::Dashboard(page_for(route, role))
}

/// Role gating hides pages without hard-failing: a route the role may not
/// see falls through to the default dashboard page.
pub fn page_for(route: Route, role: Role) -> Page {
    match route {
        Route::Expenses if role == Role::Employee => Page::Expenses,
        Route::Approvals if matches!(role, Role::Manager | Role::Admin) => Page::Approvals,
        Route::Users if role == Role::Admin => Page::Users,
        _ => Page::Dashboard,
    }
}

/// Current `window.location.hash`, empty when unavailable.
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Assign the hash, re-entering the router via the hashchange event.
pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(route.hash());
    }
}

/// Subscribe to hashchange events for the lifetime of the app.
pub fn on_hash_change(callback: impl Fn(String) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(move || callback(current_hash()));
    window.set_onhashchange(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_hashes() {
        assert_eq!(Route::from_hash("#login"), Route::Login);
        assert_eq!(Route::from_hash("#signup"), Route::Signup);
        assert_eq!(Route::from_hash("#dashboard"), Route::Dashboard);
        assert_eq!(Route::from_hash("#expenses"), Route::Expenses);
        assert_eq!(Route::from_hash("#approvals"), Route::Approvals);
        assert_eq!(Route::from_hash("#users"), Route::Users);
    }

    #[test]
    fn empty_and_unknown_hashes_land_on_dashboard() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#"), Route::Dashboard);
        assert_eq!(Route::from_hash("#no-such-page"), Route::Dashboard);
    }

    #[test]
    fn without_token_everything_is_auth() {
        for route in [
            Route::Dashboard,
            Route::Expenses,
            Route::Approvals,
            Route::Users,
        ] {
            assert_eq!(resolve(route, false, None), Outcome::Auth(AuthScreen::Login));
        }
        assert_eq!(
            resolve(Route::Signup, false, None),
            Outcome::Auth(AuthScreen::Signup)
        );
    }

    #[test]
    fn auth_routes_win_even_with_a_token() {
        // Navigating to #login with a token stored is how logout works.
        assert_eq!(
            resolve(Route::Login, true, Some(Role::Admin)),
            Outcome::Auth(AuthScreen::Login)
        );
        assert_eq!(
            resolve(Route::Signup, true, Some(Role::Employee)),
            Outcome::Auth(AuthScreen::Signup)
        );
    }

    #[test]
    fn undecodable_credential_falls_back_to_login() {
        assert_eq!(
            resolve(Route::Approvals, true, None),
            Outcome::Auth(AuthScreen::Login)
        );
    }

    #[test]
    fn non_employees_are_redirected_off_the_dashboard() {
        for role in [Role::Manager, Role::Admin] {
            assert_eq!(
                resolve(Route::Dashboard, true, Some(role)),
                Outcome::Redirect(Route::Approvals)
            );
        }
    }

    #[test]
    fn employees_keep_their_dashboard_landing_page() {
        assert_eq!(
            resolve(Route::Dashboard, true, Some(Role::Employee)),
            Outcome::Dashboard(Page::Dashboard)
        );
    }

    #[test]
    fn redirect_target_resolves_without_looping() {
        assert_eq!(
            resolve(Route::Approvals, true, Some(Role::Manager)),
            Outcome::Dashboard(Page::Approvals)
        );
    }

    #[test]
    fn unauthorized_pages_fall_through_to_the_dashboard() {
        // A manager editing the hash to #users sees the greeting, not an error.
        assert_eq!(page_for(Route::Users, Role::Manager), Page::Dashboard);
        assert_eq!(page_for(Route::Expenses, Role::Manager), Page::Dashboard);
        assert_eq!(page_for(Route::Expenses, Role::Admin), Page::Dashboard);
        assert_eq!(page_for(Route::Approvals, Role::Employee), Page::Dashboard);
    }

    #[test]
    fn authorized_pages_resolve_to_themselves() {
        assert_eq!(page_for(Route::Expenses, Role::Employee), Page::Expenses);
        assert_eq!(page_for(Route::Approvals, Role::Manager), Page::Approvals);
        assert_eq!(page_for(Route::Approvals, Role::Admin), Page::Approvals);
        assert_eq!(page_for(Route::Users, Role::Admin), Page::Users);
    }
}
