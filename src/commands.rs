//! CLI command implementations: load a network description, run a query

use std::fs;
use std::path::Path;

use anyhow::Context;
use chronolink_core::{Day, Network, User};
use serde::Deserialize;

/// JSON description of a network: members plus per-pair event timelines.
#[derive(Debug, Deserialize)]
pub struct NetworkFile {
    pub users: Vec<User>,
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LinkEntry {
    pub a: String,
    pub b: String,
    pub events: Vec<LinkEvent>,
}

#[derive(Debug, Deserialize)]
pub struct LinkEvent {
    pub date: Day,
    pub action: LinkAction,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkAction {
    Establish,
    TearDown,
}

/// Load and build the in-memory network from a description file.
pub fn load_network(path: &Path) -> anyhow::Result<Network> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading network file {}", path.display()))?;
    let file: NetworkFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing network file {}", path.display()))?;
    build_network(file)
}

/// Replay a parsed description into a `Network`, in file order.
pub fn build_network(file: NetworkFile) -> anyhow::Result<Network> {
    let mut network = Network::new();
    for user in file.users {
        let id = user.id().to_owned();
        network
            .add_user(user)
            .with_context(|| format!("adding user {id}"))?;
    }
    for link in &file.links {
        for event in &link.events {
            match event.action {
                LinkAction::Establish => network.establish(&link.a, &link.b, event.date),
                LinkAction::TearDown => network.tear_down(&link.a, &link.b, event.date),
            }
            .with_context(|| {
                format!(
                    "applying {:?} on {} to link {}-{}",
                    event.action, event.date, link.a, link.b
                )
            })?;
        }
    }
    tracing::info!(
        users = network.member_count(),
        links = network.link_count(),
        "network loaded"
    );
    Ok(network)
}

pub fn neighborhood(
    path: &Path,
    user: &str,
    date: Day,
    distance: Option<i32>,
) -> anyhow::Result<()> {
    let network = load_network(path)?;
    let friends = match distance {
        Some(max) => chronolink_core::neighborhood_within(&network, user, date, max)?,
        None => chronolink_core::neighborhood(&network, user, date)?,
    };

    let mut sorted: Vec<_> = friends.into_iter().collect();
    sorted.sort_by(|x, y| {
        x.distance
            .cmp(&y.distance)
            .then_with(|| x.user.id().cmp(y.user.id()))
    });

    println!("{} reachable from {} on {}:", sorted.len(), user, date);
    for friend in sorted {
        println!("  {}", friend);
    }
    Ok(())
}

pub fn trend(path: &Path, user: &str) -> anyhow::Result<()> {
    let network = load_network(path)?;
    let trend = chronolink_core::neighborhood_trend(&network, user)?;

    if trend.is_empty() {
        println!("{} has no linked history", user);
        return Ok(());
    }
    println!("neighborhood size of {} over time:", user);
    for (date, size) in trend {
        println!("  {date}: {size}");
    }
    Ok(())
}

pub fn active(path: &Path, a: &str, b: &str, date: Day) -> anyhow::Result<()> {
    let network = load_network(path)?;
    let state = if network.is_active(a, b, date) {
        "active"
    } else {
        "inactive"
    };
    println!("link {a}-{b} on {date}: {state}");
    if let Some(history) = network.link(a, b) {
        for line in history.to_string().lines() {
            println!("  {line}");
        }
    }
    Ok(())
}
