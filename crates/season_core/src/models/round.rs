use serde::{Deserialize, Serialize};

use super::Fixture;

/// One layer of the schedule: every competitor appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based, contiguous within a division
    pub round_number: u32,
    pub fights: Vec<Fixture>,
}

impl Round {
    pub fn new(round_number: u32, fights: Vec<Fixture>) -> Self {
        Self { round_number, fights }
    }

    pub fn is_complete(&self) -> bool {
        self.fights.iter().all(|f| f.result().is_some())
    }
}
