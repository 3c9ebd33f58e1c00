// Discord Chat Exporter JSON format. Attachments, embeds, stickers, reactions,
// mentions and inline emojis are not modelled and get ignored on parse.

use crate::model::Role;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Export {
    pub guild: Guild,
    pub channel: Channel,
    pub date_range: DateRange,
    pub exported_at: String,
    pub messages: Vec<Message>,
    pub message_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub icon_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Channel {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category_id: Option<String>,
    pub category: Option<String>,
    pub name: String,
    pub topic: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DateRange {
    pub after: Option<String>,
    pub before: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub discriminator: String,
    pub nickname: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "isBot", alias = "bot")]
    pub is_bot: bool,
    pub roles: Vec<Role>,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: String,
    pub timestamp_edited: Option<String>,
    pub call_ended_timestamp: Option<String>,
    #[serde(rename = "isPinned", alias = "pinned")]
    pub is_pinned: bool,
    pub author: Author,
    pub content: String,
}
