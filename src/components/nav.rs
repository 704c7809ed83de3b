//! Sidebar Navigation
//!
//! Role-gated links, the notification bell, and logout. Links carry plain
//! hash hrefs; the hashchange event drives navigation.

use leptos::*;

use crate::actions::{dispatch, Action};
use crate::components::notifications::NotificationBell;
use crate::router::Route;
use crate::state::global::GlobalState;
use crate::state::session::Role;

/// Links a role is offered. Pure so the menu is testable without a DOM.
pub fn links_for(role: Role) -> Vec<(Route, &'static str)> {
    let mut links = Vec::new();
    if role == Role::Employee {
        links.push((Route::Dashboard, "Dashboard"));
        links.push((Route::Expenses, "My Expenses"));
    } else {
        links.push((Route::Approvals, "Approvals"));
    }
    if role == Role::Admin {
        links.push((Route::Users, "Manage Users"));
    }
    links
}

/// Dashboard sidebar
#[component]
pub fn Sidebar(route: Route) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let identity = state.identity;

    let state_for_logout = state;
    view! {
        <aside class="w-56 bg-gray-800 border-r border-gray-700 min-h-screen flex flex-col">
            <div class="px-4 py-5 text-2xl font-bold">"Expensio"</div>

            <nav class="flex-1 px-2 space-y-1">
                {move || {
                    identity.get().map(|identity| {
                        links_for(identity.role)
                            .into_iter()
                            .map(|(target, label)| view! {
                                <NavLink target=target label=label active={route == target} />
                            })
                            .collect_view()
                    })
                }}
            </nav>

            <div class="px-2 py-4 space-y-1 border-t border-gray-700">
                <NotificationBell />
                <button
                    on:click=move |_| dispatch(state_for_logout.clone(), Action::Logout)
                    class="w-full text-left px-4 py-2 rounded-lg text-gray-300
                           hover:text-white hover:bg-gray-700 transition-colors"
                >
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(target: Route, label: &'static str, active: bool) -> impl IntoView {
    let class = if active {
        "block px-4 py-2 rounded-lg bg-gray-700 text-white"
    } else {
        "block px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
    };

    view! {
        <a href=target.hash() class=class>
            {label}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employees_see_dashboard_and_expenses() {
        let links = links_for(Role::Employee);
        let routes: Vec<Route> = links.iter().map(|(route, _)| *route).collect();
        assert_eq!(routes, vec![Route::Dashboard, Route::Expenses]);
    }

    #[test]
    fn managers_see_only_approvals() {
        let links = links_for(Role::Manager);
        let routes: Vec<Route> = links.iter().map(|(route, _)| *route).collect();
        assert_eq!(routes, vec![Route::Approvals]);
    }

    #[test]
    fn admins_also_manage_users() {
        let links = links_for(Role::Admin);
        let routes: Vec<Route> = links.iter().map(|(route, _)| *route).collect();
        assert_eq!(routes, vec![Route::Approvals, Route::Users]);
    }
}
