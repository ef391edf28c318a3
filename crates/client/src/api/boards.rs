//! Board endpoints
//!
//! Board create/update are multipart: the title and icon travel as text
//! fields, the background either as a stock-background id or an uploaded
//! image. The single-board read endpoints wrap the board in a one-element
//! array, which this group unwraps.

use serde::Deserialize;
use taskdeck_domain::{Board, Priority};

use super::endpoints;
use super::errors::ApiError;
use crate::http::client::AuthenticatedClient;
use crate::http::request::{ApiRequest, FormPart};

/// Background choice for board create/update.
#[derive(Debug, Clone)]
pub enum BoardBackground {
    /// One of the stock backgrounds, by id.
    Stock(String),
    /// An uploaded image.
    Upload { file_name: String, mime: String, bytes: Vec<u8> },
    /// Leave the current background unchanged (update only).
    Keep,
}

/// Fields for board create/update.
#[derive(Debug, Clone)]
pub struct BoardPayload {
    pub title: String,
    pub icon_id: String,
    pub background: BoardBackground,
}

impl BoardPayload {
    fn into_parts(self) -> Vec<FormPart> {
        let mut parts =
            vec![FormPart::text("title", self.title), FormPart::text("iconId", self.icon_id)];
        match self.background {
            BoardBackground::Stock(id) => parts.push(FormPart::text("backgroundId", id)),
            BoardBackground::Upload { file_name, mime, bytes } => {
                parts.push(FormPart::file("background", file_name, mime, bytes));
            }
            BoardBackground::Keep => {}
        }
        parts
    }
}

#[derive(Debug, Deserialize)]
struct BoardsResponse {
    boards: Vec<Board>,
}

#[derive(Debug, Deserialize)]
struct BoardResponse {
    board: Board,
}

/// Single-board reads answer `{ "board": [ ... ] }`.
#[derive(Debug, Deserialize)]
struct WrappedBoardResponse {
    board: Vec<Board>,
}

impl WrappedBoardResponse {
    fn into_board(self) -> Result<Board, ApiError> {
        self.board
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Decode("board response was empty".into()))
    }
}

/// Boards endpoint group.
pub struct BoardsApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> BoardsApi<'a> {
    pub(crate) fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// All boards of the authenticated user.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list(&self) -> Result<Vec<Board>, ApiError> {
        let response: BoardsResponse =
            self.client.execute(ApiRequest::get(endpoints::BOARDS)).await?;
        Ok(response.boards)
    }

    /// Create a board.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create(&self, payload: BoardPayload) -> Result<Board, ApiError> {
        let response: BoardResponse = self
            .client
            .execute(ApiRequest::post(endpoints::BOARDS).multipart(payload.into_parts()))
            .await?;
        Ok(response.board)
    }

    /// One board with its columns and cards.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get(&self, id: &str) -> Result<Board, ApiError> {
        let response: WrappedBoardResponse =
            self.client.execute(ApiRequest::get(endpoints::board(id))).await?;
        response.into_board()
    }

    /// Update title, icon or background.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update(&self, id: &str, payload: BoardPayload) -> Result<Board, ApiError> {
        let response: BoardResponse = self
            .client
            .execute(ApiRequest::patch(endpoints::board(id)).multipart(payload.into_parts()))
            .await?;
        Ok(response.board)
    }

    /// Delete a board with everything on it.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .execute::<serde_json::Value>(ApiRequest::delete(endpoints::board(id)))
            .await
            .map(|_| ())
    }

    /// The board with only cards of the given priority.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn filter(&self, id: &str, priority: Priority) -> Result<Board, ApiError> {
        let request =
            ApiRequest::get(endpoints::board_filter(id)).query("priority", priority.as_str());
        let response: WrappedBoardResponse = self.client.execute(request).await?;
        response.into_board()
    }
}
