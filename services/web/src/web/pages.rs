//! services/web/src/web/pages.rs
//!
//! askama templates for the HTML pages.

use askama::Template;
use invitation_core::InvitationView;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// URL prefix under which stored cover photos are served.
pub const COVER_URL_PREFIX: &str = "/static/images";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage;

#[derive(Template)]
#[template(path = "invitation.html")]
pub struct InvitationPage {
    pub view: InvitationView,
    pub cover_url: Option<String>,
}

impl InvitationPage {
    pub fn new(view: InvitationView) -> Self {
        let cover_url = view.cover_image_path.as_deref().map(cover_url);
        Self { view, cover_url }
    }
}

// Characters that cannot appear raw in a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Public URL for a stored cover reference. The name is percent-encoded as
/// one path segment.
pub fn cover_url(cover_image_path: &str) -> String {
    format!(
        "{}/{}",
        COVER_URL_PREFIX,
        utf8_percent_encode(cover_image_path, PATH_SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_left_readable() {
        assert_eq!(
            cover_url("Raj-Simi-photo.jpg"),
            "/static/images/Raj-Simi-photo.jpg"
        );
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(
            cover_url("Raj-Simi-50%#1?.jpg"),
            "/static/images/Raj-Simi-50%25%231%3F.jpg"
        );
        assert_eq!(cover_url("Raj Simi.jpg"), "/static/images/Raj%20Simi.jpg");
    }
}
