use crate::constants::*;
use anchor_lang::prelude::*;

/// Escalating-price reservation to buy the asset once it becomes invokable
/// again. At most one order stands per asset; each escalation multiplies the
/// required payment by `ORDER_MULTIPLIER_BPS`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, InitSpace)]
pub struct PurchaseOrder {
    pub index: u32,                // Escalation counter, 0 = no order ever placed.
    pub purchaser: Option<Pubkey>, // Standing purchaser, None = no active order.
    pub reserved_price: u64,       // Self-assessed price applied on finalization.
    pub locked_amount: u64,        // Escrowed payment, fixed at placement index.
    pub placed_at: i64,
}

impl PurchaseOrder {
    pub fn is_standing(&self) -> bool {
        self.purchaser.is_some()
    }

    pub fn expires_at(&self, invocation_period: i64) -> i64 {
        self.placed_at
            .saturating_add(invocation_period.saturating_mul(ORDER_EXPIRATION_PERIODS))
    }

    pub fn is_expired(&self, now: i64, invocation_period: i64) -> bool {
        self.is_standing() && now > self.expires_at(invocation_period)
    }

    /// Replaces the standing order with an escalated one and returns the
    /// displaced (purchaser, escrow) for refunding.
    pub fn escalate(
        &mut self,
        purchaser: Pubkey,
        payment: u64,
        reserved_price: u64,
        now: i64,
    ) -> Option<(Pubkey, u64)> {
        let displaced = self.purchaser.map(|previous| (previous, self.locked_amount));

        self.index = self.index.saturating_add(1);
        self.purchaser = Some(purchaser);
        self.reserved_price = reserved_price;
        self.locked_amount = payment;
        self.placed_at = now;

        displaced
    }

    /// Clears the standing order, keeping the escalation index so later
    /// orders still out-escalate everything that came before.
    pub fn clear(&mut self) {
        self.purchaser = None;
        self.reserved_price = 0;
        self.locked_amount = 0;
        self.placed_at = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::escalated_price;

    fn purchaser(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    #[test]
    fn test_escalation_displaces_previous_order() {
        let mut order = PurchaseOrder::default();

        assert_eq!(order.escalate(purchaser(1), 120, 500, 100), None);
        assert_eq!(order.index, 1);

        let displaced = order.escalate(purchaser(2), 144, 600, 200);
        assert_eq!(displaced, Some((purchaser(1), 120)));
        assert_eq!(order.index, 2);
        assert_eq!(order.locked_amount, 144);
        assert_eq!(order.placed_at, 200);
    }

    #[test]
    fn test_clear_preserves_index() {
        let mut order = PurchaseOrder::default();
        order.escalate(purchaser(1), 120, 500, 100);
        order.clear();

        assert!(!order.is_standing());
        assert_eq!(order.index, 1);
    }

    #[test]
    fn test_expiry_window() {
        let mut order = PurchaseOrder::default();
        order.escalate(purchaser(1), 120, 500, 1_000);

        let period = 7 * 86_400;
        assert!(!order.is_expired(1_000 + 2 * period, period));
        assert!(order.is_expired(1_001 + 2 * period, period));
    }

    #[test]
    fn test_later_orders_always_pay_more() {
        // the payment at each index strictly dominates the previous one, so a
        // later purchaser's finalized price is never below an earlier one's
        let price = 1_000_000;
        let mut order = PurchaseOrder::default();
        let mut previous_payment = 0u64;

        for _ in 0..5 {
            let payment =
                escalated_price(price, ORDER_MULTIPLIER_BPS, order.index + 1).unwrap();
            assert!(payment > previous_payment);
            order.escalate(purchaser((order.index + 1) as u8), payment, price, 0);
            previous_payment = payment;
        }
    }
}
