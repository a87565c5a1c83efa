//! Built-in content for when the CMS is unreachable and nothing usable is
//! cached. Kept in sync with the copy on the deployed landing page.

use jiff::Timestamp;
use payloads::{AboutContent, HomepageContent};

pub fn homepage() -> HomepageContent {
    HomepageContent {
        hero_title: "Studio Meridian".to_string(),
        hero_subtitle: "Brand identity, editorial design, and illustration \
                        for people with something to say."
            .to_string(),
        hero_image_url: None,
        cta_label: "See the work".to_string(),
        cta_href: "/portfolio".to_string(),
        featured_entry_slugs: Vec::new(),
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub fn about() -> AboutContent {
    AboutContent {
        heading: "About the studio".to_string(),
        body: "Studio Meridian is a small design practice focused on \
               identity systems and editorial work.\n\nThis page is \
               usually served from our content system; you are seeing the \
               built-in copy because it could not be reached."
            .to_string(),
        portrait_url: None,
        skills: vec![
            "Brand identity".to_string(),
            "Editorial design".to_string(),
            "Illustration".to_string(),
        ],
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
