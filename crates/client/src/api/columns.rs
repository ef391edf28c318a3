//! Column endpoints

use serde::{Deserialize, Serialize};
use taskdeck_domain::{Column, ColumnOrder};

use super::endpoints;
use super::errors::ApiError;
use crate::http::client::AuthenticatedClient;
use crate::http::request::ApiRequest;

/// Body for `POST /api/columns`.
#[derive(Debug, Clone, Serialize)]
pub struct NewColumn {
    pub title: String,
    /// Id of the board the column belongs to.
    pub board: String,
}

/// Body for `PATCH /api/columns/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnUpdate {
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct ColumnsResponse {
    columns: Vec<Column>,
}

/// Columns endpoint group.
pub struct ColumnsApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> ColumnsApi<'a> {
    pub(crate) fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// Create a column on a board.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create(&self, column: &NewColumn) -> Result<Column, ApiError> {
        self.client.execute(ApiRequest::post(endpoints::COLUMNS).json(column)?).await
    }

    /// Rename a column.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn edit(&self, id: &str, update: &ColumnUpdate) -> Result<Column, ApiError> {
        self.client.execute(ApiRequest::patch(endpoints::column(id)).json(update)?).await
    }

    /// Delete a column and its cards.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .execute::<serde_json::Value>(ApiRequest::delete(endpoints::column(id)))
            .await
            .map(|_| ())
    }

    /// All columns of a board, in display order.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn by_board(&self, board_id: &str) -> Result<Vec<Column>, ApiError> {
        let response: ColumnsResponse = self
            .client
            .execute(ApiRequest::get(endpoints::columns_by_board(board_id)))
            .await?;
        Ok(response.columns)
    }

    /// Persist a new column order after a drag-and-drop.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn reorder(
        &self,
        board_id: &str,
        order: &[ColumnOrder],
    ) -> Result<Vec<Column>, ApiError> {
        let body = serde_json::json!({ "columns": order });
        let response: ColumnsResponse = self
            .client
            .execute(ApiRequest::patch(endpoints::columns_reorder(board_id)).json(&body)?)
            .await?;
        Ok(response.columns)
    }
}
