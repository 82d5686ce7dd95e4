//! Tier 1: the seed graph scenario.

use friendgraph::{FriendSuggestion, SuggestionQuery, UserId};

use crate::test_utils::*;

fn suggestion_ids(s: &[FriendSuggestion]) -> Vec<UserId> {
    s.iter().map(|s| s.user.id).collect()
}

#[test]
fn direct_friends_of_a() {
    let ex = seed_explorer();
    assert_eq!(ids(&ex.get_direct_friends(A).unwrap()), vec![B, C]);
}

#[test]
fn path_a_to_d() {
    let ex = seed_explorer();
    assert_eq!(ids(&ex.find_connection_path(A, D).unwrap()), vec![A, B, D]);
}

#[test]
fn path_to_nonexistent_user_is_empty() {
    let ex = seed_explorer();
    assert!(ex.find_connection_path(A, 26).unwrap().is_empty());
}

#[test]
fn suggestions_for_a_at_level_two() {
    let ex = seed_explorer();
    let s = ex.get_friend_suggestions_with(A, Some(2), None, None).unwrap();
    assert_eq!(suggestion_ids(&s), vec![D, E, F, G]);
    for suggestion in &s {
        assert_eq!(suggestion.connection_level, 2);
        assert_ne!(suggestion.user.id, B);
        assert_ne!(suggestion.user.id, C);
        // one mutual friend, bottleneck weight 1: 2 * 1 + 1 * 1
        assert_eq!(suggestion.score, 3.0);
    }
}

#[test]
fn suggestion_paths_go_through_the_mutual_friend() {
    let g = seed_graph();
    let s = g.get_friend_suggestions(A, &SuggestionQuery::default());
    let f = s.iter().find(|s| s.user.id == F).unwrap();
    assert_eq!(ids(&f.connection_path), vec![A, C, F]);
    assert_eq!(ids(&f.mutual_friends), vec![C]);
}

#[test]
fn mutual_friends_of_d_and_e() {
    let ex = seed_explorer();
    assert_eq!(ids(&ex.find_mutual_friends(D, E).unwrap()), vec![B]);
}

#[test]
fn remove_a_b() {
    let ex = seed_explorer();
    assert!(ex.remove_friend(A, B).unwrap());
    assert_eq!(ids(&ex.get_direct_friends(A).unwrap()), vec![C]);
    assert!(!ids(&ex.get_direct_friends(B).unwrap()).contains(&A));
}

#[test]
fn lookups() {
    let ex = seed_explorer();
    assert_eq!(ex.get_all_users().unwrap().len(), 7);
    assert_eq!(ex.get_user_by_username("erin").unwrap().unwrap().id, E);
    assert!(ex.get_user_by_username("Erin").unwrap().is_none());
    assert_eq!(ex.get_user_by_id(G).unwrap().unwrap().name, "Grace");
    assert!(ex.get_user_by_id(0).unwrap().is_none());
}
