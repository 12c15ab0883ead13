//! Navigation visibility properties.

use meditrack_core::navigation::{navbar_links, sidebar_links, visible_links, LinkAccess, NavLink};
use meditrack_core::{landing_route, MemoryStorage, Role, Route, Session, SessionStore};
use proptest::prelude::*;

fn role_strategy() -> impl Strategy<Value = Option<Role>> {
    prop_oneof![
        Just(None),
        Just(Some(Role::Reception)),
        Just(Some(Role::Technician)),
        Just(Some(Role::Admin)),
    ]
}

fn session_for(role: Option<Role>) -> Option<Session> {
    role.map(|r| Session::new("tester", r))
}

proptest! {
    #[test]
    fn prop_visible_links_are_exactly_the_allowed_ones(role in role_strategy(), current in "/[a-z/-]{0,24}") {
        let session = session_for(role);
        for table in [navbar_links(), sidebar_links()] {
            let visible = visible_links(&table, session.as_ref(), &current);
            let expected: Vec<_> = table
                .iter()
                .filter(|link| match &link.access {
                    LinkAccess::All => true,
                    LinkAccess::Anonymous => role.is_none(),
                    LinkAccess::Roles(roles) => role.is_some_and(|r| roles.contains(&r)),
                })
                .collect();

            prop_assert_eq!(visible.len(), expected.len());
            for (entry, link) in visible.iter().zip(expected) {
                prop_assert_eq!(&entry.link, link);
                prop_assert_eq!(entry.active, link.route.path() == current);
            }
        }
    }

    #[test]
    fn prop_at_most_one_active_link(role in role_strategy(), index in 0usize..5) {
        let session = session_for(role);
        let table = navbar_links();
        let current = table[index].route.path();
        let visible = visible_links(&table, session.as_ref(), current);
        prop_assert!(visible.iter().filter(|e| e.active).count() <= 1);
    }
}

#[test]
fn test_anonymous_navbar_shows_public_links_only() {
    let visible = visible_links(&navbar_links(), None, "/");
    let routes: Vec<_> = visible.iter().map(|e| e.link.route).collect();
    assert_eq!(routes, vec![Route::Home, Route::Login]);
    assert!(visible[0].active);
}

#[test]
fn test_admin_sees_every_sidebar_link() {
    let admin = Session::new("root", Role::Admin);
    let visible = visible_links(&sidebar_links(), Some(&admin), "/admin/users");
    assert_eq!(visible.len(), sidebar_links().len());
    let active: Vec<_> = visible.iter().filter(|e| e.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].link.route, Route::AdminUsers);
}

#[test]
fn test_technician_sidebar() {
    let tech = Session::new("tuya", Role::Technician);
    let visible = visible_links(&sidebar_links(), Some(&tech), "/technician/dashboard");
    let routes: Vec<_> = visible.iter().map(|e| e.link.route).collect();
    assert_eq!(routes, vec![Route::TechnicianDashboard, Route::TechnicianReports]);
}

#[test]
fn test_active_match_is_exact() {
    let admin = Session::new("root", Role::Admin);
    let visible = visible_links(&sidebar_links(), Some(&admin), "/admin/users/42");
    assert!(visible.iter().all(|e| !e.active));
}

#[test]
fn test_landing_routes_round_trip_through_paths() {
    for role in Role::ALL {
        let landing = landing_route(Some(role));
        assert_eq!(Route::from_path(landing.path()), Some(landing));
    }
    assert_eq!(landing_route(None), Route::Home);
}

fn routes(table: &[NavLink], store: &SessionStore) -> Vec<Route> {
    visible_links(table, store.current().as_ref(), "/")
        .iter()
        .map(|e| e.link.route)
        .collect()
}

#[test]
fn test_links_follow_session_without_reload() {
    let store = SessionStore::open(MemoryStorage::new()).unwrap();
    let navbar = navbar_links();
    let sidebar = sidebar_links();

    assert_eq!(routes(&navbar, &store), vec![Route::Home, Route::Login]);
    assert!(routes(&sidebar, &store).is_empty());

    store.login("t1", Role::Reception, "saraa").unwrap();
    assert_eq!(
        routes(&sidebar, &store),
        vec![Route::ReceptionAddRecord, Route::ReceptionSchedule]
    );
    assert!(!routes(&navbar, &store).contains(&Route::Login));
    assert!(!routes(&navbar, &store).contains(&Route::BonusCalculator));

    store.logout().unwrap();
    assert_eq!(routes(&navbar, &store), vec![Route::Home, Route::Login]);
    assert!(routes(&sidebar, &store).is_empty());

    store.login("t2", Role::Admin, "root").unwrap();
    assert_eq!(routes(&sidebar, &store).len(), sidebar.len());
    assert!(routes(&navbar, &store).contains(&Route::BonusCalculator));
    assert!(!routes(&navbar, &store).contains(&Route::Login));
}
