//! Backend endpoint table
//!
//! Centralized location for every path the SDK talks to. Path parameters are
//! server-issued ids (hex strings), interpolated by the builder functions.

pub const AUTH_REGISTER: &str = "/api/auth/register";
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
pub const AUTH_REFRESH: &str = "/api/auth/refresh";
pub const AUTH_ME: &str = "/api/auth/me";

pub const USERS_THEME: &str = "/api/users/theme";
pub const USERS_AVATAR: &str = "/api/users/avatar";
pub const USERS_PROFILE: &str = "/api/users/profile";

pub const BOARDS: &str = "/api/boards";
pub const COLUMNS: &str = "/api/columns";
pub const CARDS: &str = "/api/cards";
pub const CARDS_STATS: &str = "/api/cards/stats";

pub const SUPPORT: &str = "/api/need-help";

#[must_use]
pub fn board(id: &str) -> String {
    format!("{BOARDS}/{id}")
}

#[must_use]
pub fn board_filter(id: &str) -> String {
    format!("{BOARDS}/{id}/filter")
}

#[must_use]
pub fn column(id: &str) -> String {
    format!("{COLUMNS}/{id}")
}

#[must_use]
pub fn columns_by_board(board_id: &str) -> String {
    format!("{COLUMNS}/board/{board_id}")
}

#[must_use]
pub fn columns_reorder(board_id: &str) -> String {
    format!("{COLUMNS}/board/{board_id}/reorder")
}

#[must_use]
pub fn card(id: &str) -> String {
    format!("{CARDS}/{id}")
}

#[must_use]
pub fn cards_by_column(column_id: &str) -> String {
    format!("{CARDS}/column/{column_id}")
}

#[must_use]
pub fn card_status(id: &str) -> String {
    format!("{CARDS}/{id}/status")
}

#[must_use]
pub fn card_order(id: &str) -> String {
    format!("{CARDS}/{id}/order")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_interpolate_ids() {
        assert_eq!(board("b1"), "/api/boards/b1");
        assert_eq!(board_filter("b1"), "/api/boards/b1/filter");
        assert_eq!(columns_by_board("b1"), "/api/columns/board/b1");
        assert_eq!(columns_reorder("b1"), "/api/columns/board/b1/reorder");
        assert_eq!(card_status("c1"), "/api/cards/c1/status");
        assert_eq!(card_order("c1"), "/api/cards/c1/order");
        assert_eq!(cards_by_column("col1"), "/api/cards/column/col1");
    }
}
