//! Ready-made listings for the festival site's collections.
//!
//! Each record type deserializes from the backend's camelCase JSON and
//! comes with a preset that wires up searchable fields, grouping and page
//! size for its page:
//!
//! | Collection | Preset       | Search                    | Extras                        |
//! |------------|--------------|---------------------------|-------------------------------|
//! | Blog       | [`blogs`]    | title, author, excerpt    | category filter, 6 per page   |
//! | Speakers   | [`speakers`] | name, designation, bio    | 8 per page                    |
//! | Schedule   | [`schedule`] | title, speaker, venue     | grouped by day                |
//! | Archive    | [`archive`]  | caption, event            | grouped by year, selectable   |
//! | Videos     | [`videos`]   | title, description        | kind as category              |
//!
//! # Examples
//!
//! ```rust
//! use listing_widgets::catalog::{self, SessionEvent};
//! use listing_widgets::fetch::decode_items;
//!
//! let body = r#"[
//!     {"id": "w1", "title": "Zine making", "speaker": "Ana", "venue": "Hall B", "day": "Day 2"},
//!     {"id": "k1", "title": "Keynote", "speaker": "Ravi", "venue": "Main stage", "day": "Day 1"}
//! ]"#;
//!
//! let sessions: Vec<SessionEvent> = decode_items(body).unwrap();
//! let list = catalog::schedule(sessions);
//! assert_eq!(list.visible_items()[0].id, "k1");
//! ```

use crate::config::ListingConfig;
use crate::group::{by_label_descending, by_trailing_number};
use crate::item::{FieldSelector, Item};
use crate::listing::Model;
use crate::paginator::Type;
use serde::Deserialize;

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Unique id.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Author display name.
    #[serde(default)]
    pub author: Option<String>,
    /// Teaser text.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Category slug, e.g. "interviews".
    #[serde(default)]
    pub category: Option<String>,
}

impl Item for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// A festival speaker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    /// Unique id.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Short biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Role or title, e.g. "Novelist".
    #[serde(default)]
    pub designation: Option<String>,
}

impl Item for Speaker {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A scheduled session or workshop.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEvent {
    /// Unique id.
    pub id: String,
    /// Session title.
    pub title: String,
    /// Who is speaking.
    #[serde(default)]
    pub speaker: Option<String>,
    /// Where it takes place.
    #[serde(default)]
    pub venue: Option<String>,
    /// Day label such as "Day 1".
    #[serde(default)]
    pub day: Option<String>,
}

impl Item for SessionEvent {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A photo from a past edition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivePhoto {
    /// Unique id.
    pub id: String,
    /// Caption text.
    #[serde(default)]
    pub caption: Option<String>,
    /// Festival year.
    #[serde(default)]
    pub year: Option<u16>,
    /// Name of the event pictured.
    #[serde(default)]
    pub event: Option<String>,
}

impl Item for ArchivePhoto {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A video recording.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Unique id.
    pub id: String,
    /// Video title.
    pub title: String,
    /// Description text.
    #[serde(default)]
    pub description: Option<String>,
    /// Kind of recording, e.g. "session" or "interview".
    #[serde(default)]
    pub kind: Option<String>,
}

impl Item for Video {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

fn post_title(p: &BlogPost) -> Option<&str> {
    Some(&p.title)
}

fn post_author(p: &BlogPost) -> Option<&str> {
    p.author.as_deref()
}

fn post_excerpt(p: &BlogPost) -> Option<&str> {
    p.excerpt.as_deref()
}

/// Blog posts: searchable by title, author and excerpt, filterable by
/// category, six per page.
pub fn blogs(posts: Vec<BlogPost>) -> Model<BlogPost> {
    let fields: Vec<FieldSelector<BlogPost>> = vec![post_title, post_author, post_excerpt];
    let config = ListingConfig::default()
        .with_title("Blog")
        .with_item_names("post", "posts")
        .with_page_size(6);
    Model::new(posts, fields, config).with_label(|p| p.title.clone())
}

fn speaker_name(s: &Speaker) -> Option<&str> {
    Some(&s.name)
}

fn speaker_designation(s: &Speaker) -> Option<&str> {
    s.designation.as_deref()
}

fn speaker_bio(s: &Speaker) -> Option<&str> {
    s.bio.as_deref()
}

fn speaker_label(s: &Speaker) -> String {
    match &s.designation {
        Some(designation) => format!("{} · {designation}", s.name),
        None => s.name.clone(),
    }
}

/// Speakers, eight per page.
pub fn speakers(speakers: Vec<Speaker>) -> Model<Speaker> {
    let fields: Vec<FieldSelector<Speaker>> =
        vec![speaker_name, speaker_designation, speaker_bio];
    let config = ListingConfig::default()
        .with_title("Speakers")
        .with_item_names("speaker", "speakers")
        .with_page_size(8);
    Model::new(speakers, fields, config).with_label(speaker_label)
}

fn session_title(s: &SessionEvent) -> Option<&str> {
    Some(&s.title)
}

fn session_speaker(s: &SessionEvent) -> Option<&str> {
    s.speaker.as_deref()
}

fn session_venue(s: &SessionEvent) -> Option<&str> {
    s.venue.as_deref()
}

fn session_day(s: &SessionEvent) -> Option<String> {
    s.day.clone()
}

fn session_label(s: &SessionEvent) -> String {
    match (&s.speaker, &s.venue) {
        (Some(speaker), Some(venue)) => format!("{} ({speaker}, {venue})", s.title),
        (Some(who), None) | (None, Some(who)) => format!("{} ({who})", s.title),
        (None, None) => s.title.clone(),
    }
}

/// The programme, grouped by day in day order ("Day 2" before "Day 10").
pub fn schedule(sessions: Vec<SessionEvent>) -> Model<SessionEvent> {
    let fields: Vec<FieldSelector<SessionEvent>> =
        vec![session_title, session_speaker, session_venue];
    let config = ListingConfig::default()
        .with_title("Schedule")
        .with_item_names("session", "sessions");
    Model::new(sessions, fields, config)
        .with_grouping(session_day, by_trailing_number)
        .with_label(session_label)
}

fn photo_caption(p: &ArchivePhoto) -> Option<&str> {
    p.caption.as_deref()
}

fn photo_event(p: &ArchivePhoto) -> Option<&str> {
    p.event.as_deref()
}

fn photo_year(p: &ArchivePhoto) -> Option<String> {
    p.year.map(|year| year.to_string())
}

fn photo_label(p: &ArchivePhoto) -> String {
    p.caption.clone().unwrap_or_else(|| p.id.clone())
}

/// The photo archive: newest year first, twelve per page, selectable for
/// bulk removal.
pub fn archive(photos: Vec<ArchivePhoto>) -> Model<ArchivePhoto> {
    let fields: Vec<FieldSelector<ArchivePhoto>> = vec![photo_caption, photo_event];
    let config = ListingConfig::default()
        .with_title("Archive")
        .with_item_names("photo", "photos")
        .with_page_size(12)
        .with_pagination_type(Type::Dots)
        .with_selection(true);
    Model::new(photos, fields, config)
        .with_grouping(photo_year, by_label_descending)
        .with_label(photo_label)
}

fn video_title(v: &Video) -> Option<&str> {
    Some(&v.title)
}

fn video_description(v: &Video) -> Option<&str> {
    v.description.as_deref()
}

/// Video recordings, filterable by kind.
pub fn videos(videos: Vec<Video>) -> Model<Video> {
    let fields: Vec<FieldSelector<Video>> = vec![video_title, video_description];
    let config = ListingConfig::default()
        .with_title("Videos")
        .with_item_names("video", "videos");
    Model::new(videos, fields, config).with_label(|v| v.title.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::decode_items;
    use crate::group::UNGROUPED;
    use serde_json::json;

    fn posts() -> Vec<BlogPost> {
        let body = json!([
            {"id": "b1", "title": "Letters from the hills", "author": "Mira Sen", "category": "essays"},
            {"id": "b2", "title": "In conversation", "author": "Tom Hale", "excerpt": "On translating hills and rivers", "category": "interviews"},
            {"id": "b3", "title": "Festival diary", "category": "news"},
        ]);
        decode_items(&body.to_string()).expect("valid posts")
    }

    #[test]
    fn test_blog_search_covers_author_and_excerpt() {
        let mut list = blogs(posts());
        list.set_search_text("HILLS");
        let ids: Vec<&str> = list.visible_items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);

        list.set_search_text("tom");
        assert_eq!(list.total_matches(), 1);
    }

    #[test]
    fn test_blog_category_filter() {
        let mut list = blogs(posts());
        list.set_category(Some("news"));
        assert_eq!(list.visible_items()[0].id, "b3");
        list.set_category(Some("all"));
        assert_eq!(list.total_matches(), 3);
    }

    #[test]
    fn test_blog_page_size() {
        let many: Vec<BlogPost> = (1..=13)
            .map(|i| BlogPost {
                id: format!("b{i}"),
                title: format!("Post {i}"),
                author: None,
                excerpt: None,
                category: None,
            })
            .collect();
        let list = blogs(many);
        assert_eq!(list.total_pages(), 3);
        assert_eq!(list.page_items().len(), 6);
    }

    #[test]
    fn test_speakers_page_size_and_label() {
        let roster: Vec<Speaker> = (1..=9)
            .map(|i| Speaker {
                id: format!("s{i}"),
                name: format!("Speaker {i}"),
                bio: None,
                designation: Some("Poet".to_string()),
            })
            .collect();
        let list = speakers(roster);
        assert_eq!(list.total_pages(), 2);
        assert!(list.view().contains("Speaker 1 · Poet"));
    }

    #[test]
    fn test_schedule_groups_by_day_in_day_order() {
        let body = json!([
            {"id": "a", "title": "Closing", "day": "Day 10"},
            {"id": "b", "title": "Slam", "day": "Day 2"},
            {"id": "c", "title": "Pop-up"},
            {"id": "d", "title": "Opening", "day": "Day 2"},
        ]);
        let sessions: Vec<SessionEvent> = decode_items(&body.to_string()).expect("valid sessions");
        let list = schedule(sessions);

        let frame = list.presentation();
        let groups = frame.groups.expect("grouped");
        let labels: Vec<&str> = groups.labels().collect();
        assert_eq!(labels, vec!["Day 2", "Day 10", UNGROUPED]);
        let day2: Vec<&str> = groups
            .get("Day 2")
            .map(|g| g.items.iter().map(|s| s.id.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(day2, vec!["b", "d"]);
    }

    #[test]
    fn test_schedule_label() {
        let session = SessionEvent {
            id: "k".into(),
            title: "Keynote".into(),
            speaker: Some("Ravi".into()),
            venue: None,
            day: None,
        };
        assert_eq!(session_label(&session), "Keynote (Ravi)");
    }

    #[test]
    fn test_archive_newest_year_first_and_selectable() {
        let body = json!([
            {"id": "p1", "caption": "Crowd", "year": 2022},
            {"id": "p2", "caption": "Stage", "year": 2024},
            {"id": "p3", "caption": "Books", "year": 2023},
        ]);
        let photos: Vec<ArchivePhoto> = decode_items(&body.to_string()).expect("valid photos");
        let mut list = archive(photos);

        let order: Vec<&str> = list.visible_items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["p2", "p3", "p1"]);

        assert!(list.config().selectable);
        list.select_all_visible();
        assert_eq!(list.selection().len(), 3);
        assert!(list.request_delete_selected());
        assert_eq!(list.status(), Some("Delete 3 photos? (y/n)"));
    }

    #[test]
    fn test_videos_filter_by_kind() {
        let body = json!({"data": [
            {"id": "v1", "title": "Opening night", "kind": "session"},
            {"id": "v2", "title": "Backstage", "kind": "interview"},
        ]});
        let clips: Vec<Video> = decode_items(&body.to_string()).expect("valid videos");
        let mut list = videos(clips);
        list.set_category(Some("Interview"));
        assert_eq!(list.total_matches(), 1);
        assert_eq!(list.visible_items()[0].id, "v2");
    }
}
