use crate::cards::Card;
use crate::hand::DealerHand;
use crate::rules::RuleSet;
use crate::shoe::Shoe;

/// Runs the dealer's hand to completion after all player hands resolve.
///
/// Reveals the hole card, then draws face-up while the variant's stopping
/// condition says to hit. Deterministic given the shoe's draw order; the only
/// randomness lives in the shuffle. An exhausted shoe stops the loop and the
/// hand stands at its current value, which may be below 17.
///
/// Returns the cards drawn during the loop (hole card excluded) so the
/// caller can feed observers.
pub fn play_dealer(dealer: &mut DealerHand, shoe: &mut Shoe, variant: &dyn RuleSet) -> Vec<Card> {
    dealer.reveal_hole();
    let mut drawn = Vec::new();
    loop {
        let best = dealer.best_value();
        if !variant.dealer_must_hit(best, dealer.is_soft()) {
            break;
        }
        match shoe.draw() {
            Some(card) => {
                dealer.add_card(card);
                drawn.push(card);
            }
            // Exhausted shoe: the hand stands where it is
            None => break,
        }
    }
    drawn
}
