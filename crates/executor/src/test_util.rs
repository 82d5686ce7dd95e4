//! Shared test fixtures.

use friendgraph_core::{User, UserId};

/// Link `a` and `b` in both directions with the given interaction weight.
pub fn befriend(users: &mut [User], a: UserId, b: UserId, weight: u32) {
    for (from, to) in [(a, b), (b, a)] {
        if let Some(u) = users.iter_mut().find(|u| u.id == from) {
            if !u.friends.contains(&to) {
                u.friends.push(to);
            }
            u.interactions.insert(to, weight);
        }
    }
}

/// Two-level tree: A(1) - B(2), C(3); B - D(4), E(5); C - F(6), G(7).
pub fn seed_users() -> Vec<User> {
    let mut users: Vec<User> = ["a", "b", "c", "d", "e", "f", "g"]
        .iter()
        .zip(1..)
        .map(|(name, id)| User::new(id, name.to_uppercase(), *name))
        .collect();
    for (a, b) in [(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (3, 7)] {
        befriend(&mut users, a, b, 1);
    }
    users
}
