//! Card, deck, and hand tests.

use std::collections::BTreeSet;

use bjcore::{Card, DECK_SIZE, Deck, EmptyDeckError, Hand, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand(cards: &[Card]) -> Hand {
    Hand::from_cards(cards.iter().copied())
}

#[test]
fn numeric_values_follow_rank() {
    assert_eq!(card(Suit::Hearts, Rank::Two).numeric_value(), 2);
    assert_eq!(card(Suit::Hearts, Rank::Nine).numeric_value(), 9);
    assert_eq!(card(Suit::Clubs, Rank::Ten).numeric_value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Jack).numeric_value(), 10);
    assert_eq!(card(Suit::Spades, Rank::Queen).numeric_value(), 10);
    assert_eq!(card(Suit::Spades, Rank::King).numeric_value(), 10);
    assert_eq!(card(Suit::Diamonds, Rank::Ace).numeric_value(), 11);

    for rank in Rank::ALL {
        assert!((2..=11).contains(&rank.value()));
    }
}

#[test]
fn card_labels_and_asset_keys() {
    let ace = card(Suit::Hearts, Rank::Ace);
    let ten = card(Suit::Spades, Rank::Ten);

    assert_eq!(ace.to_string(), "A♥");
    assert_eq!(ten.to_string(), "10♠");
    assert_eq!(ace.asset_key(), "Ahearts");
    assert_eq!(ten.asset_key(), "10spades");
    assert_eq!(card(Suit::Clubs, Rank::Queen).asset_key(), "Qclubs");
}

#[test]
fn standard_deck_has_every_card_once() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: BTreeSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(deck.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn deck_is_built_suit_major() {
    let deck = Deck::standard();
    let cards: Vec<Card> = deck.iter().copied().collect();

    assert_eq!(cards[0], card(Suit::Hearts, Rank::Two));
    assert_eq!(cards[12], card(Suit::Hearts, Rank::Ace));
    assert_eq!(cards[13], card(Suit::Diamonds, Rank::Two));
    assert_eq!(cards[51], card(Suit::Spades, Rank::Ace));
}

#[test]
fn deck_ignores_repeated_suits_and_ranks() {
    let deck = Deck::new(&[Suit::Hearts, Suit::Hearts], &[Rank::Ace, Rank::Two, Rank::Ace]);
    assert_eq!(deck.len(), 2);

    let deck = Deck::from_cards([
        card(Suit::Clubs, Rank::Five),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Hearts, Rank::Five),
    ]);
    assert_eq!(deck.len(), 2);
}

#[test]
fn shuffle_preserves_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let original = Deck::standard();
    let mut deck = original.clone();
    deck.shuffle(&mut rng);

    assert_ne!(deck, original);

    let mut before: Vec<Card> = original.iter().copied().collect();
    let mut after: Vec<Card> = deck.iter().copied().collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let mut first = Deck::standard();
    let mut second = Deck::standard();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(first, second);

    let mut third = Deck::standard();
    third.shuffle(&mut ChaCha8Rng::seed_from_u64(100));
    assert_ne!(first, third);
}

#[test]
fn deal_takes_from_the_front() {
    let mut deck = Deck::standard();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(3));

    while !deck.is_empty() {
        let before = deck.len();
        let expected = deck.iter().next().copied();
        let dealt = deck.deal().unwrap();

        assert_eq!(Some(dealt), expected);
        assert_eq!(deck.len(), before - 1);
        assert!(!deck.contains(&dealt));
    }

    assert_eq!(deck.deal(), Err(EmptyDeckError));
    assert_eq!(deck.len(), 0);
}

#[test]
fn empty_deck_cannot_deal() {
    let mut deck = Deck::empty();
    assert!(deck.is_empty());
    assert_eq!(deck.deal().unwrap_err().to_string(), "no cards left in the deck");
}

#[test]
fn hand_scores() {
    use Rank::{Ace, Eight, Four, King, Nine, Queen, Ten, Three, Two};

    assert_eq!(
        hand(&[card(Suit::Spades, Ten), card(Suit::Hearts, Ace)]).score(),
        21
    );
    assert_eq!(
        hand(&[
            card(Suit::Hearts, Ace),
            card(Suit::Diamonds, Ace),
            card(Suit::Clubs, Nine),
        ])
        .score(),
        21
    );
    assert_eq!(
        hand(&[
            card(Suit::Hearts, Ace),
            card(Suit::Diamonds, Ace),
            card(Suit::Clubs, Ace),
            card(Suit::Spades, Eight),
        ])
        .score(),
        21
    );
    assert_eq!(
        hand(&[card(Suit::Spades, King), card(Suit::Hearts, Queen)]).score(),
        20
    );
    assert_eq!(
        hand(&[
            card(Suit::Clubs, Two),
            card(Suit::Diamonds, Three),
            card(Suit::Hearts, Four),
        ])
        .score(),
        9
    );
}

#[test]
fn hand_softness_and_bust() {
    let mut soft = Hand::new();
    soft.add_card(card(Suit::Hearts, Rank::Ace));
    soft.add_card(card(Suit::Clubs, Rank::Six));
    assert_eq!(soft.score(), 17);
    assert!(soft.is_soft());

    soft.add_card(card(Suit::Spades, Rank::Ten));
    assert_eq!(soft.score(), 17);
    assert!(!soft.is_soft());
    assert!(!soft.is_bust());

    soft.add_card(card(Suit::Diamonds, Rank::Five));
    assert_eq!(soft.score(), 22);
    assert!(soft.is_bust());
    assert_eq!(soft.len(), 4);

    soft.clear();
    assert!(soft.is_empty());
    assert_eq!(soft.score(), 0);
}

#[test]
fn full_deck_hand_scores_every_card() {
    let hand = Hand::from_cards(Deck::standard().iter().copied());
    assert_eq!(hand.len(), DECK_SIZE);
    assert_eq!(hand.score(), 340);
    assert!(hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn many_aces_stay_bust() {
    let ace = card(Suit::Hearts, Rank::Ace);

    let hand = Hand::from_cards(vec![ace; 24]);
    assert_eq!(hand.score(), 24);
    assert!(hand.is_bust());

    let hand = Hand::from_cards(vec![ace; 256]);
    assert_eq!(hand.score(), 256);
    assert!(hand.is_bust());

    let hand = Hand::from_cards(vec![ace; 11]);
    assert_eq!(hand.score(), 21);
    assert!(hand.is_soft());
}

#[test]
fn score_is_recomputed_after_each_card() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    assert_eq!(hand.score(), 11);
    hand.add_card(card(Suit::Hearts, Rank::King));
    assert_eq!(hand.score(), 21);
    hand.add_card(card(Suit::Hearts, Rank::Queen));
    assert_eq!(hand.score(), 21);
    hand.add_card(card(Suit::Hearts, Rank::Two));
    assert_eq!(hand.score(), 23);
}
