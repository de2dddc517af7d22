//! Route construction for everything the admin pages link to, so no
//! template ever assembles a URL by hand.

pub fn chirps_index() -> String {
    "/admin/chirps".to_string()
}

pub fn chirps_index_page(page: i64) -> String {
    format!("/admin/chirps?page={page}")
}

pub fn chirp(id: i64) -> String {
    format!("/admin/chirps/{id}")
}

pub fn chirp_edit(id: i64) -> String {
    format!("/admin/chirps/{id}/edit")
}
