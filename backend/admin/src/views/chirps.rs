use askama::Template;
use chrono::{DateTime, Utc};

use crate::database::chirp;

use super::pagination::Pager;
use super::urls;

/// Display fallback when a chirp has no owning user.
pub const ANONYMOUS: &str = "Anonymous";

/// Abbreviated month, zero-padded day, 4-digit year, 12-hour clock —
/// e.g. `Jan 05, 2024 3:42 PM`.
const TIMESTAMP_FORMAT: &str = "%b %d, %Y %-I:%M %p";

#[derive(Template)]
#[template(path = "admin/chirps/index.html")]
pub struct IndexTemplate {
    pub notice: Option<String>,
    pub chirps: Vec<ChirpCard>,
    pub pager: Pager,
    pub csrf_token: String,
}

/// One chirp row with everything precomputed, so the template stays
/// logic-free.
pub struct ChirpCard {
    pub author: String,
    pub posted_at: String,
    pub edited: bool,
    pub message: String,
    pub edit_url: String,
    pub destroy_url: String,
}

impl ChirpCard {
    pub fn new(chirp: &chirp::Model, author: Option<&str>) -> Self {
        Self {
            author: author.unwrap_or(ANONYMOUS).to_string(),
            posted_at: format_timestamp(&chirp.created_at),
            edited: chirp.is_edited(),
            message: chirp.message.clone(),
            edit_url: urls::chirp_edit(chirp.id),
            destroy_url: urls::chirp(chirp.id),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/chirps/edit.html")]
pub struct EditTemplate {
    pub author: String,
    pub posted_at: String,
    pub message: String,
    pub update_url: String,
    pub back_url: String,
    pub csrf_token: String,
}

impl EditTemplate {
    pub fn new(chirp: &chirp::Model, author: Option<&str>, csrf_token: String) -> Self {
        Self {
            author: author.unwrap_or(ANONYMOUS).to_string(),
            posted_at: format_timestamp(&chirp.created_at),
            message: chirp.message.clone(),
            update_url: urls::chirp(chirp.id),
            back_url: urls::chirps_index(),
            csrf_token,
        }
    }
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
