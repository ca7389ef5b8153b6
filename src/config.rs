use log::Level;

/// Vertical scroll offset, in pixels, past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const IMAGE_HOST: &str = "https://images.unsplash.com";

pub const BRAND_NAME: &str = "LuxeDetail";
pub const BRAND_SUFFIX: &str = "Pro";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Builds a cropped, auto-formatted image URL for an image host photo id.
pub fn image_url(photo_id: &str, width: u32) -> String {
    format!(
        "{}/{}?q=80&w={}&auto=format&fit=crop",
        IMAGE_HOST, photo_id, width
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_includes_photo_and_width() {
        assert_eq!(
            image_url("photo-1603584173870-7f3ca99a4741", 2070),
            "https://images.unsplash.com/photo-1603584173870-7f3ca99a4741?q=80&w=2070&auto=format&fit=crop"
        );
    }

    #[test]
    fn threshold_is_fifty_pixels() {
        assert_eq!(SCROLL_THRESHOLD_PX, 50.0);
    }
}
