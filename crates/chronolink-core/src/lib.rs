//! Chronolink Core — temporal social graph model and query engine

pub mod link;
pub mod model;
pub mod network;
pub mod search;
pub mod trend;


#[cfg(test)]
pub mod test_utils;

pub use link::{LinkHistory, LinkState};
pub use model::{Day, Friend, NetworkError, User};
pub use network::Network;
pub use search::{neighborhood, neighborhood_within};
pub use trend::neighborhood_trend;
