//! A single-player blackjack game core with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs each round: building and
//! shuffling a deck, dealing, player hits and stands, dealer play, and
//! deciding the winner. Rendering is left to the caller, which reads hands
//! and scores after each command.
//!
//! # Example
//!
//! ```
//! use bjcore::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_round().expect("a full deck deals a round");
//!
//! while game.player_score() < 17 {
//!     if game.hit().expect("player turn") {
//!         break;
//!     }
//! }
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().expect("player turn");
//!     game.dealer_play().expect("dealer turn");
//! }
//!
//! let outcome = game.determine_winner().expect("round over");
//! println!("{outcome}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DealerError, EmptyDeckError, OutcomeError};
pub use game::{DEALER_STANDS_ON, Game, GameState};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use participant::Participant;
pub use result::Outcome;
