//! Tier 2: friendship edits observed through the Explorer API.

use friendgraph::Error;

use crate::test_utils::*;

#[test]
fn new_friendship_changes_suggestions() {
    let ex = seed_explorer();
    assert!(ex.add_friend(D, F).unwrap());

    // D now hangs off F, three hops from G
    let s = ex.get_friend_suggestions_with(G, Some(3), None, None).unwrap();
    let d = s.iter().find(|s| s.user.id == D).unwrap();
    assert_eq!(ids(&d.connection_path), vec![G, C, F, D]);
    assert_eq!(d.connection_level, 3);
}

#[test]
fn new_friendship_is_seeded_with_default_weight() {
    let ex = seed_explorer();
    assert!(ex.add_friend(E, G).unwrap());
    assert_eq!(ex.interaction_weight(E, G).unwrap(), 5);
    assert_eq!(ex.interaction_weight(G, E).unwrap(), 5);
}

#[test]
fn shortcut_shortens_paths() {
    let ex = seed_explorer();
    assert_eq!(ex.find_connection_path(D, G).unwrap().len(), 5);
    assert!(ex.add_friend(D, G).unwrap());
    assert_eq!(ids(&ex.find_connection_path(D, G).unwrap()), vec![D, G]);
    assert!(ex.remove_friend(G, D).unwrap());
    assert_eq!(ex.find_connection_path(D, G).unwrap().len(), 5);
}

#[test]
fn cutting_the_bridge_disconnects() {
    let ex = seed_explorer();
    assert!(ex.remove_friend(A, C).unwrap());
    assert!(ex.find_connection_path(D, F).unwrap().is_empty());
    assert!(ex
        .get_friend_suggestions_with(D, Some(6), None, None)
        .unwrap()
        .iter()
        .all(|s| ![C, F, G].contains(&s.user.id)));
}

#[test]
fn rejected_mutations_return_false() {
    let ex = seed_explorer();
    assert!(!ex.add_friend(A, 404).unwrap());
    assert!(!ex.add_friend(A, A).unwrap());
    assert!(!ex.remove_friend(404, A).unwrap());
    assert!(!ex.update_interaction_weight(A, 404, 3).unwrap());
    assert_eq!(ids(&ex.get_direct_friends(A).unwrap()), vec![B, C]);
}

#[test]
fn zero_weight_is_invalid_input() {
    let ex = seed_explorer();
    let err = ex.update_interaction_weight(A, B, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn stronger_interactions_promote_a_candidate() {
    let ex = seed_explorer();
    assert!(ex.update_interaction_weight(A, C, 4).unwrap());
    assert!(ex.update_interaction_weight(C, G, 3).unwrap());
    let s = ex.get_friend_suggestions(A).unwrap();
    assert_eq!(s[0].user.id, G);
    // min(4, 3) = 3 through C
    assert_eq!(s[0].interaction_weight, 3);
    assert_eq!(s[0].score, 2.0 + 3.0);
}

#[test]
fn filtered_suggestions() {
    let ex = seed_explorer();
    assert!(ex.add_friend(C, D).unwrap());
    // D now shares B and C with A
    let s = ex.get_filtered_suggestions(A, 2, None).unwrap();
    assert_eq!(s.iter().map(|s| s.user.id).collect::<Vec<_>>(), vec![D]);
    assert_eq!(s[0].mutual_friends.len(), 2);
}

#[test]
fn concurrent_explorers_share_state() {
    let ex = seed_explorer();
    let handles: Vec<_> = [(D, F), (E, G), (D, G), (E, F)]
        .into_iter()
        .map(|(a, b)| {
            let ex = ex.clone();
            std::thread::spawn(move || ex.add_friend(a, b).unwrap())
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
    let mut d_friends = ids(&ex.get_direct_friends(D).unwrap());
    d_friends.sort();
    assert_eq!(d_friends, vec![B, F, G]);
}
