//! HTML fragment rendering
//!
//! Pure functions from records to HTML strings. Containers in the page are
//! replaced with these fragments wholesale, never patched.

mod templates;

use crate::actions::Action;
use crate::api::types::{UserRecord, VideoRecord, non_empty};
use crate::format::{
    format_date, format_duration, format_file_size, format_megabytes, format_short_date,
};
use askama::Template;
pub(crate) use templates::{ChartView, CounterView, PageTemplate};
use templates::{
    ActionButton, ModalField, ModalTemplate, ToastTemplate, UserRowTemplate, UsersEmptyTemplate,
    VideoCardTemplate, VideosEmptyTemplate,
};

pub use askama::Error as RenderError;

fn button(action: Action, tone: &'static str, icon: &'static str) -> ActionButton {
    let descriptor = action.descriptor();
    ActionButton {
        kind: descriptor.kind.to_string(),
        target_id: descriptor.target_id,
        tone,
        icon,
    }
}

pub fn videos_empty() -> Result<String, RenderError> {
    VideosEmptyTemplate.render()
}

pub fn video_card(video: &VideoRecord) -> Result<String, RenderError> {
    VideoCardTemplate {
        id: video.id,
        uploader: non_empty(&video.username).unwrap_or("Unknown").to_string(),
        date: format_short_date(&video.created_at),
        size_mb: format_megabytes(video.file_size),
        chat_id: video.chat_id,
        buttons: vec![
            button(Action::ViewVideo(video.id), "primary", "fa-eye"),
            button(Action::DownloadVideo(video.id), "success", "fa-download"),
            button(Action::ShowVideoInfo(video.id), "info", "fa-info"),
        ],
    }
    .render()
}

pub fn users_empty() -> Result<String, RenderError> {
    UsersEmptyTemplate.render()
}

/// First character of username, else first name, else `?`, upper-cased.
pub fn avatar_initial(user: &UserRecord) -> String {
    non_empty(&user.username)
        .or_else(|| non_empty(&user.first_name))
        .and_then(|name| name.chars().next())
        .unwrap_or('?')
        .to_uppercase()
        .collect()
}

fn full_name(first: &Option<String>, last: &Option<String>) -> String {
    [first.as_deref(), last.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn user_row(user: &UserRecord) -> Result<String, RenderError> {
    let username = non_empty(&user.username);
    let (status, status_tone) = if user.is_active() {
        ("Active", "success")
    } else {
        ("Inactive", "secondary")
    };

    UserRowTemplate {
        user_id: user.user_id,
        initial: avatar_initial(user),
        has_username: username.is_some(),
        username: username.unwrap_or_default().to_string(),
        full_name: full_name(&user.first_name, &user.last_name),
        video_count: user.video_count,
        last_video: user
            .last_video_date
            .as_deref()
            .map(format_short_date)
            .unwrap_or_else(|| "No videos".to_string()),
        joined: format_short_date(&user.created_at),
        status,
        status_tone,
        buttons: vec![
            button(Action::ViewUserVideos(user.user_id), "primary", "fa-video"),
            button(Action::ViewUserInfo(user.user_id), "info", "fa-info"),
            button(Action::EditUserPrefs(user.user_id), "warning", "fa-cog"),
        ],
    }
    .render()
}

pub fn toast(
    id: u64,
    success: bool,
    message: &str,
    showing: bool,
) -> Result<String, RenderError> {
    let (tone, icon) = if success {
        ("success", "fa-check-circle")
    } else {
        ("danger", "fa-exclamation-triangle")
    };
    ToastTemplate {
        id,
        tone,
        icon,
        message: message.to_string(),
        showing,
    }
    .render()
}

pub fn video_modal(video: &VideoRecord) -> Result<String, RenderError> {
    let mut fields = vec![
        ModalField {
            label: "Uploader",
            value: non_empty(&video.username).unwrap_or("Unknown").to_string(),
        },
        ModalField {
            label: "Name",
            value: full_name(&video.first_name, &video.last_name),
        },
        ModalField {
            label: "Sent",
            value: format_date(&video.created_at),
        },
        ModalField {
            label: "Size",
            value: format_file_size(video.file_size),
        },
        ModalField {
            label: "Chat",
            value: video.chat_id.to_string(),
        },
    ];
    if let Some(duration) = video.duration {
        fields.push(ModalField {
            label: "Duration",
            value: format_duration(duration),
        });
    }
    if let Some(file_id) = non_empty(&video.file_id) {
        fields.push(ModalField {
            label: "File id",
            value: file_id.to_string(),
        });
    }

    ModalTemplate {
        title: format!("Video #{}", video.id),
        fields,
    }
    .render()
}

pub fn user_modal(user: &UserRecord) -> Result<String, RenderError> {
    let fields = vec![
        ModalField {
            label: "Username",
            value: non_empty(&user.username)
                .map(|name| format!("@{}", name))
                .unwrap_or_else(|| "No username".to_string()),
        },
        ModalField {
            label: "Name",
            value: full_name(&user.first_name, &user.last_name),
        },
        ModalField {
            label: "Videos",
            value: user.video_count.to_string(),
        },
        ModalField {
            label: "Last video",
            value: user
                .last_video_date
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| "No videos".to_string()),
        },
        ModalField {
            label: "Joined",
            value: format_date(&user.created_at),
        },
    ];

    ModalTemplate {
        title: format!("User {}", user.user_id),
        fields,
    }
    .render()
}

/// Visible text of an HTML fragment: tags dropped, entities decoded,
/// whitespace collapsed.
pub fn text_content(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let decoded = decode_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        let decoded = rest.find(';').and_then(|end| {
            let entity = &rest[1..end];
            let c = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            c.map(|c| (c, end))
        });
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ActionDescriptor, ActionKind};

    fn video(id: i64, username: Option<&str>) -> VideoRecord {
        VideoRecord {
            id,
            username: username.map(str::to_string),
            file_size: 1572864,
            chat_id: -1001,
            created_at: "2024-03-05 09:07:00".to_string(),
            file_id: None,
            first_name: None,
            last_name: None,
            duration: None,
        }
    }

    fn user(id: i64, username: Option<&str>, first: Option<&str>, videos: u64) -> UserRecord {
        UserRecord {
            user_id: id,
            username: username.map(str::to_string),
            first_name: first.map(str::to_string),
            last_name: Some("Petrov".to_string()),
            video_count: videos,
            last_video_date: None,
            created_at: "2024-01-02 10:00:00".to_string(),
        }
    }

    /// Pull every `data-action`/`data-target-id` pair out of a fragment.
    ///
    /// The target is only looked up inside the same tag as its action.
    fn descriptors(html: &str) -> Vec<ActionDescriptor> {
        html.split("data-action=\"")
            .skip(1)
            .map(|rest| {
                let kind = &rest[..rest.find('"').unwrap()];
                let tag = &rest[..rest.find('>').unwrap()];
                let target = tag
                    .split("data-target-id=\"")
                    .nth(1)
                    .map(|t| &t[..t.find('"').unwrap()]);
                ActionDescriptor::from_attributes(kind, target).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_video_card_contents() {
        let html = video_card(&video(12, Some("grisha"))).unwrap();
        assert!(html.contains(r#"data-video-id="12""#));
        assert!(html.contains("grisha"));
        assert!(html.contains("05.03.2024"));
        assert!(html.contains("1.5 MB"));
        assert!(html.contains("-1001"));
    }

    #[test]
    fn test_video_card_falls_back_to_unknown_uploader() {
        let html = video_card(&video(3, None)).unwrap();
        assert!(html.contains("Unknown"));
        let html = video_card(&video(4, Some(""))).unwrap();
        assert!(html.contains("Unknown"));
    }

    #[test]
    fn test_video_card_buttons_carry_typed_descriptors() {
        let html = video_card(&video(8, Some("a"))).unwrap();
        let kinds: Vec<_> = descriptors(&html)
            .into_iter()
            .map(|d| (d.kind, d.target_id))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (ActionKind::ViewVideo, Some(8)),
                (ActionKind::DownloadVideo, Some(8)),
                (ActionKind::ShowVideoInfo, Some(8)),
            ]
        );
    }

    #[test]
    fn test_user_row_buttons_parse_back_to_their_actions() {
        let html = user_row(&user(31, Some("anna"), None, 1)).unwrap();
        let actions: Vec<Action> = descriptors(&html)
            .into_iter()
            .map(|d| Action::try_from(d).unwrap())
            .collect();
        assert_eq!(
            actions,
            vec![
                Action::ViewUserVideos(31),
                Action::ViewUserInfo(31),
                Action::EditUserPrefs(31),
            ]
        );
    }

    #[test]
    fn test_button_target_follows_descriptor() {
        assert_eq!(button(Action::Refresh, "primary", "fa-sync").target_id, None);
        assert_eq!(
            button(Action::ShowVideoInfo(4), "info", "fa-info").target_id,
            Some(4)
        );
    }

    #[test]
    fn test_avatar_initial_fallbacks() {
        assert_eq!(avatar_initial(&user(1, Some("zoe"), Some("Anna"), 0)), "Z");
        assert_eq!(avatar_initial(&user(1, None, Some("anna"), 0)), "A");
        assert_eq!(avatar_initial(&user(1, Some(""), Some("олег"), 0)), "О");
        assert_eq!(avatar_initial(&user(1, None, None, 0)), "?");
    }

    #[test]
    fn test_user_row_activity_badge() {
        let inactive = user_row(&user(5, Some("ivan"), Some("Ivan"), 0)).unwrap();
        assert!(inactive.contains("bg-secondary"));
        assert!(text_content(&inactive).contains("Inactive"));
        assert!(!inactive.contains("bg-success"));

        let active = user_row(&user(6, Some("ivan"), Some("Ivan"), 4)).unwrap();
        assert!(active.contains(r#"<span class="badge bg-success">Active</span>"#));
    }

    #[test]
    fn test_user_row_without_username_or_videos() {
        let html = user_row(&user(9, None, Some("Ivan"), 0)).unwrap();
        let text = text_content(&html);
        assert!(text.contains("No username"));
        assert!(text.contains("No videos"));
        assert!(text.contains("Ivan Petrov"));
        assert!(!html.contains('@'));
        assert!(html.contains(r#"data-user-id="9""#));
    }

    #[test]
    fn test_user_row_escapes_names() {
        let html = user_row(&user(2, Some("<b>x</b>"), None, 1)).unwrap();
        assert!(!html.contains("<b>x</b>"));
        assert!(text_content(&html).contains("<b>x</b>"));
    }

    #[test]
    fn test_toast_tone() {
        let ok = toast(1, true, "Exported", true).unwrap();
        assert!(ok.contains("bg-success") && ok.contains(" show"));
        let err = toast(2, false, "Failed", false).unwrap();
        assert!(err.contains("bg-danger") && !err.contains(" show"));
        assert!(err.contains(r#"data-action="dismiss-notification" data-target-id="2""#));
    }

    #[test]
    fn test_video_modal_lists_details() {
        let mut record = video(5, Some("grisha"));
        record.duration = Some(75);
        record.file_id = Some("BAACAgIAAxk".to_string());
        let text = text_content(&video_modal(&record).unwrap());
        assert!(text.contains("Video #5"));
        assert!(text.contains("1.5 MB"));
        assert!(text.contains("1:15"));
        assert!(text.contains("BAACAgIAAxk"));
    }

    #[test]
    fn test_text_content_strips_markup() {
        assert_eq!(
            text_content("<td><b>Ann</b>\n   &amp; <i>Bob</i></td>"),
            "Ann & Bob"
        );
        assert_eq!(text_content("&#60;b&#62; &#x27;q&#39; &amp"), "<b> 'q' &amp");
    }
}
