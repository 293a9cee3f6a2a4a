
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // backend run with `cargo run -p sk27-backend`
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // served by the backend itself
}

pub fn image_endpoint() -> String {
    format!("{}/api/images/generate", get_backend_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_endpoint_is_under_backend_url() {
        assert!(image_endpoint().starts_with(get_backend_url()));
        assert!(image_endpoint().ends_with("/api/images/generate"));
    }
}
