/// How long the success banner stays up before the contact form falls back to idle.
pub const CONTACT_RESET_DELAY_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Contact intake service when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}
