use trackchain_types::nav::{NavDepth, NavKey, NavState, NavTable, SelectOutcome};
use trackchain_types::route::{MatchMode, RouteClassifier, Router, ScreenId};

fn keys(state: &NavState, table: &NavTable, active: NavKey, collapsed: bool) -> Vec<NavKey> {
    state.visible_rows(table, active, collapsed).iter().map(|row| row.entry.key).collect()
}

#[test]
fn default_rail_on_batches_shows_the_full_manage_group() {
    let table = NavTable::builtin();
    let state = NavState::with_defaults(&table);
    let rows = state.visible_rows(&table, NavKey::Batches, false);

    let keys: Vec<NavKey> = rows.iter().map(|row| row.entry.key).collect();
    assert_eq!(keys, NavKey::ALL.to_vec(), "every entry is visible in declared order");

    let manage = rows.iter().find(|row| row.entry.key == NavKey::Manage).unwrap();
    assert_eq!(manage.expansion, Some(true), "manage shows the expanded indicator");
    let children: Vec<NavKey> = rows
        .iter()
        .filter(|row| row.depth == NavDepth::Child)
        .map(|row| row.entry.key)
        .collect();
    assert_eq!(
        children,
        vec![NavKey::Batches, NavKey::Packages, NavKey::Products, NavKey::Categories]
    );
    assert!(rows.iter().all(|row| row.show_label));
}

#[test]
fn selecting_a_child_routes_and_reclassifies() {
    let table = NavTable::builtin();
    let classifier = RouteClassifier::default();
    let mut state = NavState::with_defaults(&table);
    let mut router = Router::default();

    let packages = table.find(NavKey::Packages).unwrap().entry.clone();
    let SelectOutcome::Navigate { path, .. } = state.select(&packages) else {
        panic!("packages is a leaf and should navigate");
    };
    assert!(router.replace(path));
    let screen = router.screen();
    assert_eq!(screen, ScreenId::Packages);
    assert_eq!(classifier.classify(screen, Some(router.current())), NavKey::Packages);
}

#[test]
fn collapsing_the_parent_keeps_the_active_group_visible() {
    let table = NavTable::builtin();
    let mut state = NavState::with_defaults(&table);
    let manage = table.find(NavKey::Manage).unwrap().entry.clone();

    assert_eq!(
        state.select(&manage),
        SelectOutcome::Toggled {
            parent: NavKey::Manage,
            open: false
        }
    );
    assert!(keys(&state, &table, NavKey::Categories, false).contains(&NavKey::Batches));
    assert!(!keys(&state, &table, NavKey::Shipments, false).contains(&NavKey::Batches));
}

#[test]
fn batches_route_highlights_manage_because_they_share_a_path() {
    let classifier = RouteClassifier::new(MatchMode::Segment);
    let router = Router::new("/(tabs)/manage");
    assert_eq!(classifier.classify(router.screen(), Some(router.current())), NavKey::Manage);
}

#[test]
fn collapsed_rail_shows_only_roots_away_from_manage() {
    let table = NavTable::builtin();
    let state = NavState::with_defaults(&table);
    let rows = state.visible_rows(&table, NavKey::Dashboard, true);
    assert!(rows.iter().all(|row| row.depth == NavDepth::Root));
    assert_eq!(rows.len(), table.roots().len());
}
