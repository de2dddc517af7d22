use hyper::Body;
use routerify::Router;

use super::error::RouteError;

pub mod chirps;

pub fn routes() -> Router<Body, RouteError> {
    Router::builder()
        .get("/chirps", chirps::index)
        .get("/chirps/:id/edit", chirps::edit)
        .put("/chirps/:id", chirps::update)
        .patch("/chirps/:id", chirps::update)
        .delete("/chirps/:id", chirps::destroy)
        .build()
        .expect("failed to build admin router")
}
