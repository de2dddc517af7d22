use askama::Template;
use hyper::{header, Body, Request, Response, StatusCode};
use routerify::prelude::RequestExt as _;

use crate::api::csrf::CsrfToken;
use crate::api::error::{Result, ResultExt, RouteError};
use crate::api::ext::RequestExt as _;
use crate::api::flash;
use crate::api::macros::make_response;
use crate::database::{chirp, user};
use crate::global::GlobalState;
use crate::views::chirps::{ChirpCard, EditTemplate, IndexTemplate};
use crate::views::pagination::Pager;
use crate::views::urls;

/// The original column size of the message body.
const MESSAGE_MAX_CHARS: usize = 255;

/// GET /admin/chirps — the paginated management list.
pub async fn index(req: Request<Body>) -> Result<Response<Body>> {
    let global = req.get_global()?;

    let page = req
        .uri()
        .query()
        .and_then(|v| {
            url::form_urlencoded::parse(v.as_bytes()).find_map(|(k, v)| {
                if k == "page" {
                    v.parse::<i64>().ok()
                } else {
                    None
                }
            })
        })
        .unwrap_or(1)
        .max(1);

    let chirps = chirp::paginate(&global.db, page, global.config.per_page)
        .await
        .extend_route("failed to fetch chirps")?;

    let author_ids: Vec<i64> = chirps.items.iter().filter_map(|c| c.user_id).collect();
    let authors = user::find_by_ids(&global.db, &author_ids)
        .await
        .extend_route("failed to fetch chirp authors")?;

    let cards: Vec<ChirpCard> = chirps
        .items
        .iter()
        .map(|c| {
            let author = c.user_id.and_then(|id| authors.get(&id));
            ChirpCard::new(c, author.map(|u| u.name.as_str()))
        })
        .collect();

    let csrf_token = CsrfToken::new(&global.config)
        .serialize(&global.config)
        .ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to sign form token",
        ))?;

    let notice = flash::take(&req);
    let had_notice = notice.is_some();

    let body = IndexTemplate {
        notice,
        chirps: cards,
        pager: Pager::new(chirps.current_page, chirps.last_page()),
        csrf_token,
    }
    .render()
    .extend_route("failed to render chirp list")?;

    let mut response = make_response!(StatusCode::OK, body);

    if had_notice {
        response.headers_mut().insert(
            header::SET_COOKIE,
            flash::clear_cookie()
                .parse()
                .expect("clear cookie is a valid header value"),
        );
    }

    Ok(response)
}

/// GET /admin/chirps/:id/edit — the edit form.
pub async fn edit(req: Request<Body>) -> Result<Response<Body>> {
    let global = req.get_global()?;
    let id = param_id(&req)?;

    let chirp = chirp::find(&global.db, id)
        .await
        .extend_route("failed to fetch chirp")?
        .ok_or((StatusCode::NOT_FOUND, "chirp not found"))?;

    let author = match chirp.user_id {
        Some(user_id) => user::find_by_ids(&global.db, &[user_id])
            .await
            .extend_route("failed to fetch chirp author")?
            .remove(&user_id),
        None => None,
    };

    let csrf_token = CsrfToken::new(&global.config)
        .serialize(&global.config)
        .ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to sign form token",
        ))?;

    let body = EditTemplate::new(&chirp, author.as_ref().map(|u| u.name.as_str()), csrf_token)
        .render()
        .extend_route("failed to render edit form")?;

    Ok(make_response!(StatusCode::OK, body))
}

/// PUT /admin/chirps/:id — update the message, reached via method
/// override from the edit form.
pub async fn update(mut req: Request<Body>) -> Result<Response<Body>> {
    let global = req.get_global()?;
    let id = param_id(&req)?;

    let body = hyper::body::to_bytes(req.body_mut())
        .await
        .extend_route("failed to read form body")?;
    let form = ChirpForm::parse(&body);

    verify_csrf(&global, &form)?;

    let message = form
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or((StatusCode::UNPROCESSABLE_ENTITY, "message is required"))?;

    if message.chars().count() > MESSAGE_MAX_CHARS {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "message must not be longer than 255 characters",
        )
            .into());
    }

    chirp::find(&global.db, id)
        .await
        .extend_route("failed to fetch chirp")?
        .ok_or((StatusCode::NOT_FOUND, "chirp not found"))?;

    chirp::update_message(&global.db, id, message)
        .await
        .extend_route("failed to update chirp")?;

    tracing::info!(id, "chirp updated");

    flash::redirect(&urls::chirps_index(), "Chirp updated successfully.")
}

/// DELETE /admin/chirps/:id — destroy, reached via method override from
/// the list's delete form.
pub async fn destroy(mut req: Request<Body>) -> Result<Response<Body>> {
    let global = req.get_global()?;
    let id = param_id(&req)?;

    let body = hyper::body::to_bytes(req.body_mut())
        .await
        .extend_route("failed to read form body")?;
    let form = ChirpForm::parse(&body);

    verify_csrf(&global, &form)?;

    if !chirp::delete(&global.db, id)
        .await
        .extend_route("failed to delete chirp")?
    {
        return Err((StatusCode::NOT_FOUND, "chirp not found").into());
    }

    tracing::info!(id, "chirp deleted");

    flash::redirect(&urls::chirps_index(), "Chirp deleted successfully.")
}

#[derive(Debug, Default)]
pub(crate) struct ChirpForm {
    pub token: Option<String>,
    pub message: Option<String>,
}

impl ChirpForm {
    pub(crate) fn parse(body: &[u8]) -> Self {
        url::form_urlencoded::parse(body).fold(Self::default(), |mut acc, (key, value)| {
            match key.as_ref() {
                "_token" => acc.token = Some(value.into_owned()),
                "message" => acc.message = Some(value.into_owned()),
                _ => {}
            }

            acc
        })
    }
}

fn param_id(req: &Request<Body>) -> Result<i64> {
    req.param("id")
        .expect("route param missing")
        .parse::<i64>()
        .map_err(|e| RouteError::from((StatusCode::BAD_REQUEST, "invalid chirp id", e)))
}

fn verify_csrf(global: &GlobalState, form: &ChirpForm) -> Result<()> {
    let token = form.token.as_deref().unwrap_or_default();

    CsrfToken::verify(&global.config, token).ok_or((
        StatusCode::FORBIDDEN,
        "form token is invalid or has expired",
    ))?;

    Ok(())
}
