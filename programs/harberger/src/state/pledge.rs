use anchor_lang::prelude::*;

/// Collateral-lock collaborator surface. Only the configured pledge
/// authority mutates this; the core merely reads the two predicates.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, InitSpace)]
pub struct Pledge {
    pub pledged_until: i64, // Timestamp the pledge is honored until.
    pub claimable: bool,    // Whether a claim against the pledge is open.
}

impl Pledge {
    pub fn is_outstanding(&self, now: i64) -> bool {
        self.claimable || self.pledged_until >= now
    }
}
