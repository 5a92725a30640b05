use serde::{Deserialize, Serialize};

use crate::backend::types::CommissionRecord;
use crate::models::label;

/// Lifecycle state of a commission. The wire form is the snake_case token;
/// screens show the title-cased label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Queued,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Queued, Status::InProgress, Status::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Queued => "queued",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Queued => "Queued",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }

    pub fn from_machine(token: &str) -> Option<Status> {
        match token {
            "queued" => Some(Status::Queued),
            "in_progress" => Some(Status::InProgress),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Option<Status> {
        Status::from_machine(&label::machineify(label))
    }
}

/// Kind of design work a commission asks for. Single pieces plus the
/// multi-asset package offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Banner,
    Logo,
    Thumbnail,
    ProfilePicture,
    Emotes,
    Custom,
    DiscordServerPackage,
    DiscordUserProfilePackage,
    SocialMediaBannerPackage,
    StarterStreamerPackage,
    StarterYoutubePackage,
    StreamerPackage,
}

impl ProjectType {
    pub const ALL: [ProjectType; 12] = [
        ProjectType::Banner,
        ProjectType::Logo,
        ProjectType::Thumbnail,
        ProjectType::ProfilePicture,
        ProjectType::Emotes,
        ProjectType::Custom,
        ProjectType::DiscordServerPackage,
        ProjectType::DiscordUserProfilePackage,
        ProjectType::SocialMediaBannerPackage,
        ProjectType::StarterStreamerPackage,
        ProjectType::StarterYoutubePackage,
        ProjectType::StreamerPackage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Banner => "banner",
            ProjectType::Logo => "logo",
            ProjectType::Thumbnail => "thumbnail",
            ProjectType::ProfilePicture => "profile_picture",
            ProjectType::Emotes => "emotes",
            ProjectType::Custom => "custom",
            ProjectType::DiscordServerPackage => "discord_server_package",
            ProjectType::DiscordUserProfilePackage => "discord_user_profile_package",
            ProjectType::SocialMediaBannerPackage => "social_media_banner_package",
            ProjectType::StarterStreamerPackage => "starter_streamer_package",
            ProjectType::StarterYoutubePackage => "starter_youtube_package",
            ProjectType::StreamerPackage => "streamer_package",
        }
    }

    pub fn label(self) -> String {
        label::displayify(self.as_str())
    }

    pub fn from_machine(token: &str) -> Option<ProjectType> {
        ProjectType::ALL.iter().copied().find(|t| t.as_str() == token)
    }

    /// Packages bundle several assets; the intake form nudges these towards
    /// the Standard tier so nothing gets dropped.
    pub fn is_package(self) -> bool {
        matches!(
            self,
            ProjectType::DiscordServerPackage
                | ProjectType::DiscordUserProfilePackage
                | ProjectType::SocialMediaBannerPackage
                | ProjectType::StarterStreamerPackage
                | ProjectType::StarterYoutubePackage
                | ProjectType::StreamerPackage
        )
    }
}

/// Pricing tier chosen on the intake form, forwarded to checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Starter,
    Standard,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Starter, Tier::Standard, Tier::Premium];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Starter => "starter",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }

    pub fn label(self) -> String {
        label::displayify(self.as_str())
    }

    pub fn from_machine(token: &str) -> Option<Tier> {
        Tier::ALL.iter().copied().find(|t| t.as_str() == token)
    }
}

/// A commission as the admin screens hold it: status strongly typed, the
/// project type already mapped to its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Commission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub discord: String,
    pub details: String,
    /// Display label for the project type, e.g. "Banner".
    pub kind: String,
    pub status: Status,
    pub created_at: String,
    pub designers: Option<String>,
}

impl Commission {
    /// Map a wire record into display form. Unknown status tokens fall back
    /// to `Queued` rather than poisoning the whole list.
    pub fn from_record(record: CommissionRecord) -> Commission {
        let status = Status::from_machine(&record.status).unwrap_or_else(|| {
            log::warn!(
                "commission {}: unknown status token {:?}, treating as queued",
                record.id,
                record.status
            );
            Status::Queued
        });

        Commission {
            id: record.id,
            name: record.name,
            email: record.email,
            discord: record.discord,
            details: record.details,
            kind: label::displayify(&record.kind),
            status,
            created_at: record.created_at,
            designers: record.designers,
        }
    }

    pub fn assigned_label(&self) -> &str {
        match self.designers.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "Unassigned",
        }
    }
}
