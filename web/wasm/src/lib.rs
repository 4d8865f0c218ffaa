use bjcore::{Card, Game, GameOptions, GameState, Hand, Outcome};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        let options = self.game.options().clone();
        self.game = Game::new(options, seed as u64);
    }

    pub fn start_round(&mut self) -> Result<(), JsValue> {
        self.game.start_round().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<bool, JsValue> {
        self.game.hit().map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    pub fn dealer_play(&mut self) -> Result<u32, JsValue> {
        self.game
            .dealer_play()
            .map(|drawn| drawn.len() as u32)
            .map_err(js_err)
    }

    pub fn dealer_draw_one(&mut self) -> Result<bool, JsValue> {
        self.game.dealer_draw_one().map_err(js_err)
    }

    pub fn determine_winner(&self) -> Result<JsValue, JsValue> {
        let outcome = self.game.determine_winner().map_err(js_err)?;
        to_js_value(&JsOutcome::from(outcome))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let reveal_dealer = state == GameState::RoundOver;

        let snapshot = Snapshot {
            state: state_to_str(state),
            in_progress: state.is_in_progress(),
            player: JsParticipant {
                name: self.game.player().name().into(),
                hand: JsHand::from_hand(self.game.player_hand(), true),
            },
            dealer: JsParticipant {
                name: self.game.dealer().name().into(),
                hand: JsHand::from_hand(self.game.dealer_hand(), reveal_dealer),
            },
            cards_remaining: self.game.cards_remaining() as u32,
            outcome: self.game.determine_winner().ok().map(JsOutcome::from),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    in_progress: bool,
    player: JsParticipant,
    dealer: JsParticipant,
    cards_remaining: u32,
    outcome: Option<JsOutcome>,
}

#[derive(Serialize)]
struct JsParticipant {
    name: String,
    hand: JsHand,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
    asset_key: String,
}

#[derive(Serialize)]
struct JsHand {
    /// Hidden cards are `None` so the renderer can draw a card back.
    cards: Vec<Option<JsCard>>,
    score: Option<u16>,
    is_soft: bool,
    is_bust: bool,
}

impl JsHand {
    /// While the round is in progress only the dealer's first card is shown.
    fn from_hand(hand: &Hand, revealed: bool) -> Self {
        let cards = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (revealed || index == 0).then(|| card_to_js(*card)))
            .collect();

        Self {
            cards,
            score: revealed.then(|| hand.score()),
            is_soft: revealed && hand.is_soft(),
            is_bust: revealed && hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsOutcome {
    outcome: &'static str,
    message: &'static str,
    player_wins: bool,
}

impl From<Outcome> for JsOutcome {
    fn from(outcome: Outcome) -> Self {
        Self {
            outcome: outcome_to_str(outcome),
            message: outcome.message(),
            player_wins: outcome.player_wins(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.label(),
        value: card.numeric_value(),
        asset_key: card.asset_key(),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "NotStarted",
        GameState::PlayerTurn => "PlayerTurn",
        GameState::DealerTurn => "DealerTurn",
        GameState::RoundOver => "RoundOver",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "PlayerBust",
        Outcome::DealerBust => "DealerBust",
        Outcome::PlayerWin => "PlayerWin",
        Outcome::DealerWin => "DealerWin",
        Outcome::Push => "Push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
