use askama::Template;

/// A button carrying a typed action descriptor.
pub struct ActionButton {
    pub kind: String,
    pub target_id: Option<i64>,
    pub tone: &'static str,
    pub icon: &'static str,
}

#[derive(Template)]
#[template(path = "videos_empty.html")]
pub struct VideosEmptyTemplate;

#[derive(Template)]
#[template(path = "video_card.html")]
pub struct VideoCardTemplate {
    pub id: i64,
    pub uploader: String,
    pub date: String,
    pub size_mb: String,
    pub chat_id: i64,
    pub buttons: Vec<ActionButton>,
}

#[derive(Template)]
#[template(path = "users_empty.html")]
pub struct UsersEmptyTemplate;

#[derive(Template)]
#[template(path = "user_row.html")]
pub struct UserRowTemplate {
    pub user_id: i64,
    pub initial: String,
    pub has_username: bool,
    pub username: String,
    pub full_name: String,
    pub video_count: u64,
    pub last_video: String,
    pub joined: String,
    pub status: &'static str,
    pub status_tone: &'static str,
    pub buttons: Vec<ActionButton>,
}

#[derive(Template)]
#[template(path = "toast.html")]
pub struct ToastTemplate {
    pub id: u64,
    pub tone: &'static str,
    pub icon: &'static str,
    pub message: String,
    pub showing: bool,
}

pub struct ModalField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Template)]
#[template(path = "modal.html")]
pub struct ModalTemplate {
    pub title: String,
    pub fields: Vec<ModalField>,
}

pub struct CounterView {
    pub id: &'static str,
    pub label: &'static str,
    pub value: u64,
}

pub struct ChartView {
    pub id: &'static str,
    pub labels: String,
    pub series: String,
    pub revision: u64,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub generated_at: String,
    pub loading: bool,
    pub counters: Vec<CounterView>,
    pub charts: Vec<ChartView>,
    pub videos_grid: Option<String>,
    pub users_tbody: Option<String>,
    pub search_query: String,
    pub toasts: String,
    pub modal: Option<String>,
}
