//! Card endpoints
//!
//! Deployed backend versions disagree on envelope shapes for single-card
//! answers (`{ data }`, `{ card }`, or the bare card); [`CardEnvelope`]
//! accepts all three. Payloads are validated client-side before they leave
//! the process.

use serde::Deserialize;
use taskdeck_domain::{Card, CardPayload, CardStats};

use super::endpoints;
use super::errors::ApiError;
use crate::http::client::AuthenticatedClient;
use crate::http::request::ApiRequest;

/// Single-card answers: `{ "data": ... }`, `{ "card": ... }` or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CardEnvelope {
    Data { data: Card },
    Card { card: Card },
    Bare(Card),
}

impl CardEnvelope {
    fn into_card(self) -> Card {
        match self {
            Self::Data { data } => data,
            Self::Card { card } => card,
            Self::Bare(card) => card,
        }
    }
}

/// Card-list answers: `{ "cards": ... }`, `{ "data": ... }` or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CardListEnvelope {
    Cards { cards: Vec<Card> },
    Data { data: Vec<Card> },
    Bare(Vec<Card>),
}

impl CardListEnvelope {
    fn into_cards(self) -> Vec<Card> {
        match self {
            Self::Cards { cards } => cards,
            Self::Data { data } => data,
            Self::Bare(cards) => cards,
        }
    }
}

/// Cards endpoint group.
pub struct CardsApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> CardsApi<'a> {
    pub(crate) fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// Create a card in a column.
    ///
    /// # Errors
    /// Returns [`ApiError::Validation`] before sending when required fields
    /// are missing, otherwise the request failure.
    pub async fn create(&self, payload: &CardPayload) -> Result<Card, ApiError> {
        payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;
        let response: CardEnvelope =
            self.client.execute(ApiRequest::post(endpoints::CARDS).json(payload)?).await?;
        Ok(response.into_card())
    }

    /// Replace a card's editable fields.
    ///
    /// # Errors
    /// Returns [`ApiError::Validation`] before sending when required fields
    /// are missing, otherwise the request failure.
    pub async fn edit(&self, id: &str, payload: &CardPayload) -> Result<Card, ApiError> {
        payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;
        let response: CardEnvelope =
            self.client.execute(ApiRequest::patch(endpoints::card(id)).json(payload)?).await?;
        Ok(response.into_card())
    }

    /// Delete a card.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .execute::<serde_json::Value>(ApiRequest::delete(endpoints::card(id)))
            .await
            .map(|_| ())
    }

    /// All cards of a column.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn by_column(&self, column_id: &str) -> Result<Vec<Card>, ApiError> {
        let response: CardListEnvelope = self
            .client
            .execute(ApiRequest::get(endpoints::cards_by_column(column_id)))
            .await?;
        Ok(response.into_cards())
    }

    /// Move a card to another column.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn move_to(&self, id: &str, new_column_id: &str) -> Result<Card, ApiError> {
        let body = serde_json::json!({ "newColumnId": new_column_id });
        let response: CardEnvelope = self
            .client
            .execute(ApiRequest::patch(endpoints::card_status(id)).json(&body)?)
            .await?;
        Ok(response.into_card())
    }

    /// Persist a card's new position within a column.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn reorder(&self, id: &str, column_id: &str, order: u32) -> Result<Card, ApiError> {
        let body = serde_json::json!({ "columnId": column_id, "order": order });
        let response: CardEnvelope = self
            .client
            .execute(ApiRequest::patch(endpoints::card_order(id)).json(&body)?)
            .await?;
        Ok(response.into_card())
    }

    /// Server-side card statistics across all boards.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn stats(&self) -> Result<CardStats, ApiError> {
        self.client.execute(ApiRequest::get(endpoints::CARDS_STATS)).await
    }
}
