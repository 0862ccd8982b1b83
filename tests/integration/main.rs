//! Integration tests for Chronolink
//!
//! End-to-end scenarios driving the network lifecycle and both query paths
//! together, the way a caller coordinating a live social graph would.

use chrono::NaiveDate;
use chronolink_core::{
    neighborhood, neighborhood_trend, neighborhood_within, Network, NetworkError, User,
};

fn day(dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, dom).unwrap()
}

fn populated(ids: &[&str]) -> Network {
    let mut network = Network::new();
    for id in ids {
        network.add_user(User::new(*id).unwrap()).unwrap();
    }
    network
}

/// A link's whole life: establish, tear down, re-establish, queried at every
/// phase from both endpoints.
#[test]
fn test_link_lifecycle_end_to_end() {
    let mut network = populated(&["ana", "ben"]);

    network.establish("ana", "ben", day(1)).unwrap();
    assert!(network.is_active("ana", "ben", day(5)));

    network.tear_down("ben", "ana", day(10)).unwrap();
    assert!(!network.is_active("ana", "ben", day(10)));
    assert!(!network.is_active("ben", "ana", day(12)));

    // Backdated re-establishment must fail and leave the link untouched.
    assert_eq!(
        network.establish("ana", "ben", day(7)),
        Err(NetworkError::InvalidDate)
    );
    assert!(!network.is_active("ana", "ben", day(12)));

    network.establish("ana", "ben", day(14)).unwrap();
    assert!(network.is_active("ben", "ana", day(14)));
}

/// The chain scenario: reachability grows and shrinks as the far link
/// toggles, and the trend reports exactly those inflection points.
#[test]
fn test_chain_reachability_and_trend() {
    let mut network = populated(&["ana", "ben", "cho"]);
    network.establish("ana", "ben", day(1)).unwrap();
    network.establish("ben", "cho", day(5)).unwrap();
    network.tear_down("ben", "cho", day(20)).unwrap();

    assert_eq!(neighborhood(&network, "ana", day(3)).unwrap().len(), 2);
    assert_eq!(neighborhood(&network, "ana", day(7)).unwrap().len(), 3);
    assert_eq!(neighborhood(&network, "ana", day(25)).unwrap().len(), 2);

    let trend = neighborhood_trend(&network, "ana").unwrap();
    let kept: Vec<(NaiveDate, usize)> = trend.into_iter().collect();
    assert_eq!(kept, vec![(day(1), 2), (day(5), 3), (day(20), 2)]);

    // Between two kept dates the sampled size equals the earlier kept size.
    assert_eq!(neighborhood(&network, "ana", day(12)).unwrap().len(), 3);
    assert_eq!(neighborhood(&network, "ana", day(19)).unwrap().len(), 3);
}

/// Bounded searches nest: each bound's result is contained in the next, and
/// past the graph's diameter they all match the unbounded search.
#[test]
fn test_bounded_neighborhoods_nest() {
    let mut network = populated(&["a", "b", "c", "d", "e"]);
    network.establish("a", "b", day(1)).unwrap();
    network.establish("b", "c", day(1)).unwrap();
    network.establish("c", "d", day(1)).unwrap();
    network.establish("d", "e", day(1)).unwrap();

    let unbounded = neighborhood(&network, "a", day(2)).unwrap();
    let mut previous = neighborhood_within(&network, "a", day(2), 0).unwrap();
    for bound in 1..=6 {
        let current = neighborhood_within(&network, "a", day(2), bound).unwrap();
        assert!(previous.is_subset(&current));
        previous = current;
    }
    assert_eq!(previous, unbounded);
    assert_eq!(unbounded.len(), 5);
}

/// Trend discovery across two roots of the same graph sees each root's own
/// inflection points.
#[test]
fn test_trend_depends_on_root() {
    let mut network = populated(&["hub", "x", "y"]);
    network.establish("hub", "x", day(2)).unwrap();
    network.establish("hub", "y", day(8)).unwrap();
    network.tear_down("hub", "x", day(12)).unwrap();

    let hub = neighborhood_trend(&network, "hub").unwrap();
    assert_eq!(
        hub.into_iter().collect::<Vec<_>>(),
        vec![(day(2), 2), (day(8), 3), (day(12), 2)]
    );

    // x loses everyone when its only link drops.
    let x = neighborhood_trend(&network, "x").unwrap();
    assert_eq!(
        x.into_iter().collect::<Vec<_>>(),
        vec![(day(2), 2), (day(8), 3), (day(12), 1)]
    );
}

/// Profile data rides along with search results but never affects identity.
#[test]
fn test_friend_records_carry_profiles() {
    let mut network = Network::new();
    network
        .add_user(
            User::new("ana")
                .unwrap()
                .with_first_name("Ana")
                .with_email("ana@example.com"),
        )
        .unwrap();
    network.add_user(User::new("ben").unwrap()).unwrap();
    network.establish("ana", "ben", day(1)).unwrap();

    let friends = neighborhood(&network, "ben", day(2)).unwrap();
    let ana = friends.iter().find(|f| f.user.id() == "ana").unwrap();
    assert_eq!(ana.distance, 1);
    assert_eq!(ana.user.first_name.as_deref(), Some("Ana"));
    assert_eq!(ana.user.email.as_deref(), Some("ana@example.com"));
}
