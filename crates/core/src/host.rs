//! Services provided by the page-builder host

/// The slice of host functionality widgets consume directly.
///
/// Control rendering, settings persistence, and selector-binding expansion
/// all stay on the host's side of the boundary; widgets hand over
/// declarative schemas and receive resolved settings records. The only
/// service that crosses over is the host's generic placeholder image.
pub trait Host: Send + Sync {
    /// Generic placeholder used as the default of image controls
    fn placeholder_image_url(&self) -> String;
}

/// Host backed by fixed values, for previews and tests
#[derive(Debug, Clone)]
pub struct StaticHost {
    placeholder_image_url: String,
}

impl StaticHost {
    pub fn new(placeholder_image_url: impl Into<String>) -> Self {
        Self {
            placeholder_image_url: placeholder_image_url.into(),
        }
    }
}

impl Host for StaticHost {
    fn placeholder_image_url(&self) -> String {
        self.placeholder_image_url.clone()
    }
}
