//! Typed action descriptors
//!
//! Every interactive element in the rendered page carries a `data-action`
//! kind and, where relevant, a `data-target-id`. Dispatch reads those two
//! attributes back into an [`Action`].

use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ActionKind {
    Refresh,
    ExportData,
    ExportVideos,
    ExportUsers,
    ViewVideo,
    DownloadVideo,
    ShowVideoInfo,
    ViewUserVideos,
    ViewUserInfo,
    EditUserPrefs,
    DismissNotification,
    CloseModal,
}

impl ActionKind {
    pub fn requires_target(&self) -> bool {
        !matches!(
            self,
            ActionKind::Refresh
                | ActionKind::ExportData
                | ActionKind::ExportVideos
                | ActionKind::ExportUsers
                | ActionKind::CloseModal
        )
    }
}

/// Which payload an export writes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExportTarget {
    Dashboard,
    Videos,
    Users,
}

/// The raw attribute pair attached to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    pub target_id: Option<i64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Unknown action kind: {0}")]
    UnknownKind(String),

    #[error("Action {0} requires a target id")]
    MissingTarget(ActionKind),

    #[error("Invalid target id: {0}")]
    InvalidTarget(String),
}

impl ActionDescriptor {
    /// Read a descriptor from `data-action` / `data-target-id` attribute values.
    pub fn from_attributes(kind: &str, target_id: Option<&str>) -> Result<Self, ActionError> {
        let kind =
            ActionKind::from_str(kind).map_err(|_| ActionError::UnknownKind(kind.to_string()))?;
        let target_id = target_id
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| ActionError::InvalidTarget(raw.to_string()))
            })
            .transpose()?;
        Ok(Self { kind, target_id })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Refresh,
    Export(ExportTarget),
    ViewVideo(i64),
    DownloadVideo(i64),
    ShowVideoInfo(i64),
    ViewUserVideos(i64),
    ViewUserInfo(i64),
    EditUserPrefs(i64),
    DismissNotification(u64),
    CloseModal,
}

impl TryFrom<ActionDescriptor> for Action {
    type Error = ActionError;

    fn try_from(descriptor: ActionDescriptor) -> Result<Self, Self::Error> {
        let kind = descriptor.kind;
        let target = || descriptor.target_id.ok_or(ActionError::MissingTarget(kind));

        let action = match kind {
            ActionKind::Refresh => Action::Refresh,
            ActionKind::ExportData => Action::Export(ExportTarget::Dashboard),
            ActionKind::ExportVideos => Action::Export(ExportTarget::Videos),
            ActionKind::ExportUsers => Action::Export(ExportTarget::Users),
            ActionKind::ViewVideo => Action::ViewVideo(target()?),
            ActionKind::DownloadVideo => Action::DownloadVideo(target()?),
            ActionKind::ShowVideoInfo => Action::ShowVideoInfo(target()?),
            ActionKind::ViewUserVideos => Action::ViewUserVideos(target()?),
            ActionKind::ViewUserInfo => Action::ViewUserInfo(target()?),
            ActionKind::EditUserPrefs => Action::EditUserPrefs(target()?),
            ActionKind::DismissNotification => {
                let id = target()?;
                let id = u64::try_from(id).map_err(|_| ActionError::InvalidTarget(id.to_string()))?;
                Action::DismissNotification(id)
            }
            ActionKind::CloseModal => Action::CloseModal,
        };
        Ok(action)
    }
}

impl Action {
    pub fn descriptor(&self) -> ActionDescriptor {
        let (kind, target_id) = match *self {
            Action::Refresh => (ActionKind::Refresh, None),
            Action::Export(ExportTarget::Dashboard) => (ActionKind::ExportData, None),
            Action::Export(ExportTarget::Videos) => (ActionKind::ExportVideos, None),
            Action::Export(ExportTarget::Users) => (ActionKind::ExportUsers, None),
            Action::ViewVideo(id) => (ActionKind::ViewVideo, Some(id)),
            Action::DownloadVideo(id) => (ActionKind::DownloadVideo, Some(id)),
            Action::ShowVideoInfo(id) => (ActionKind::ShowVideoInfo, Some(id)),
            Action::ViewUserVideos(id) => (ActionKind::ViewUserVideos, Some(id)),
            Action::ViewUserInfo(id) => (ActionKind::ViewUserInfo, Some(id)),
            Action::EditUserPrefs(id) => (ActionKind::EditUserPrefs, Some(id)),
            Action::DismissNotification(id) => {
                (ActionKind::DismissNotification, i64::try_from(id).ok())
            }
            Action::CloseModal => (ActionKind::CloseModal, None),
        };
        ActionDescriptor { kind, target_id }
    }
}
