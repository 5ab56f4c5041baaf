// ═══════════════════════════════════════════════════════════════════════
// Game store — holds the one authoritative GameState for a front end.
//
// No rules live here. `dispatch` forwards to the engine, swaps in the
// returned state, remembers the message, and notifies subscribers.
// ═══════════════════════════════════════════════════════════════════════

use crate::cards::classify;
use crate::engine::{apply_action, Action};
use crate::random::RandomSource;
use crate::setup::initialize;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreAction {
    SelectCard(usize),
    Flee,
    /// Deal a brand new run and clear the message.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameState, Option<&str>)>;

pub struct GameStore<R: RandomSource> {
    state: GameState,
    message: Option<String>,
    random: R,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<R: RandomSource> GameStore<R> {
    /// Deal the first run from `random`; later resets draw from it too.
    pub fn new(mut random: R) -> Self {
        let state = initialize(&mut random);
        GameStore {
            state,
            message: None,
            random,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Message from the last rejected action, if the last action was rejected.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn card_type(&self, card: &Card) -> CardType {
        classify(card)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameState, Option<&str>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&mut self, action: StoreAction) {
        match action {
            StoreAction::SelectCard(index) => self.apply(Action::SelectCard(index)),
            StoreAction::Flee => self.apply(Action::Flee),
            StoreAction::Reset => {
                self.state = initialize(&mut self.random);
                self.message = None;
            }
        }
        self.notify();
    }

    fn apply(&mut self, action: Action) {
        let transition = apply_action(&self.state, action);
        self.state = transition.state;
        self.message = transition.result.message;
    }

    fn notify(&mut self) {
        let state = &self.state;
        let message = self.message.as_deref();
        for (_, listener) in self.listeners.iter_mut() {
            listener(state, message);
        }
    }
}
