use sha2::{Digest, Sha256};

use crate::models::DivisionSchedule;

/// SHA-256 fingerprint of a season's pairings.
///
/// Covers division numbers, fixture identifiers and fighters in emitted
/// order. Results and display names are excluded, so recording outcomes or
/// renaming a division leaves the digest unchanged.
pub fn schedule_digest(divisions: &[DivisionSchedule]) -> String {
    let mut hasher = Sha256::new();

    for division in divisions {
        hasher.update(format!("D{}\n", division.division_number).as_bytes());
        for fixture in division.fixtures() {
            hasher.update(fixture.id().to_string().as_bytes());
            hasher.update(b"|");
            hasher.update(fixture.fighter1().as_str().as_bytes());
            hasher.update(b"|");
            hasher.update(fixture.fighter2().as_str().as_bytes());
            hasher.update(b"\n");
        }
    }

    format!("{:x}", hasher.finalize())
}
