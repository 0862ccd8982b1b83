//! Shared builders for chronolink-core tests

use crate::model::{Day, User};
use crate::network::Network;

/// Shorthand for a calendar day in the test year.
pub fn day(dom: u32) -> Day {
    // January runs out at 31; roll into February for larger test days.
    // Day 0 rolls back into December so tests can name "the day before day 1".
    if dom == 0 {
        Day::from_ymd_opt(2019, 12, 31).unwrap()
    } else if dom <= 31 {
        Day::from_ymd_opt(2020, 1, dom).unwrap()
    } else {
        Day::from_ymd_opt(2020, 2, dom - 31).unwrap()
    }
}

/// A network of `ids` with no links yet.
pub fn network_of(ids: &[&str]) -> Network {
    let mut network = Network::new();
    for id in ids {
        network.add_user(User::new(*id).unwrap()).unwrap();
    }
    network
}

/// The three-user chain used across the query tests: a-b active from day 1,
/// b-c active over [day 5, day 20).
pub fn chain_network() -> Network {
    let mut network = network_of(&["a", "b", "c"]);
    network.establish("a", "b", day(1)).unwrap();
    network.establish("b", "c", day(5)).unwrap();
    network.tear_down("b", "c", day(20)).unwrap();
    network
}
