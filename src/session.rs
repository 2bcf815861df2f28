//! User session: selected persona, current weights and scraper state
//!
//! Each session owns its weights outright; nothing here is shared between
//! users. Weights are stored per persona so switching presets and back keeps
//! earlier adjustments.

use crate::error::Result;
use crate::parcel::ParcelCatalog;
use crate::ranking::{rank_parcels, RankedParcel};
use crate::scoring::{analyze_sentiment, SentimentReading};
use crate::weights::{Persona, WeightKey, WeightSet};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Session {
    persona: Persona,
    weights: FxHashMap<Persona, WeightSet>,
    last_scraped_sentiment: Option<u8>,
}

impl Session {
    pub fn new(persona: Persona) -> Self {
        let mut session = Self {
            persona,
            weights: FxHashMap::default(),
            last_scraped_sentiment: None,
        };
        session.select_persona(persona);
        session
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Current weights for the selected persona
    pub fn weights(&self) -> WeightSet {
        self.weights
            .get(&self.persona)
            .copied()
            .unwrap_or_else(|| self.persona.default_weights())
    }

    fn current_mut(&mut self) -> &mut WeightSet {
        let persona = self.persona;
        self.weights
            .entry(persona)
            .or_insert_with(|| persona.default_weights())
    }

    /// Switch persona; seeds defaults only the first time this persona is used
    pub fn select_persona(&mut self, persona: Persona) {
        self.persona = persona;
        if !self.weights.contains_key(&persona) {
            tracing::debug!("Seeding session weights from persona {}", persona);
            self.weights.insert(persona, persona.default_weights());
        }
    }

    /// Force-reset current weights to the persona's institutional defaults
    pub fn reset_to_persona(&mut self) {
        let defaults = self.persona.default_weights();
        *self.current_mut() = defaults;
    }

    pub fn set_weight(&mut self, key: WeightKey, value: i64) -> Result<()> {
        self.current_mut().set(key, value)
    }

    /// Run the sentiment scraper and feed its suggestion into the sentiment weight
    pub fn run_sentiment_scraper(&mut self, transcript: &str) -> SentimentReading {
        let reading = analyze_sentiment(transcript);
        self.current_mut().sentiment = reading.suggested_weight;
        self.last_scraped_sentiment = Some(reading.score);
        tracing::info!(
            "Scraped council sentiment {} / 100 (suggested weight {})",
            reading.score,
            reading.suggested_weight
        );
        reading
    }

    /// Most recent scraper score, kept for display alongside the weight
    pub fn last_scraped_sentiment(&self) -> Option<u8> {
        self.last_scraped_sentiment
    }

    /// Rank every parcel in the catalog under the current weights
    pub fn rank(&self, catalog: &ParcelCatalog) -> Vec<RankedParcel> {
        rank_parcels(catalog, &self.weights())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Persona::default())
    }
}
