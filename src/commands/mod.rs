//! The /region command surface: tokenized argument routing.
//!
//! The host's chat dispatcher owns tokenization and permission-to-use checks;
//! this module routes the tokens and always answers with user-facing lines.

mod executors;

use crate::handlers::RegionGuard;

pub const USAGE: &str =
    "Usage: /region <wand|create|delete|list|addmember|removemember|info> [name] [player]";

/// Who issued the command. Privileged callers may manage regions they do not
/// own (administrator override).
#[derive(Debug, Clone)]
pub struct CommandSource {
    pub name: String,
    pub privileged: bool,
}

impl CommandSource {
    pub fn new(name: impl Into<String>, privileged: bool) -> Self {
        Self {
            name: name.into(),
            privileged,
        }
    }
}

/// Routes one /region invocation. Extra trailing arguments are ignored, as in
/// the chat interface this mirrors.
pub async fn dispatch(guard: &RegionGuard, sender: &CommandSource, args: &[&str]) -> Vec<String> {
    let Some((sub, rest)) = args.split_first() else {
        return vec![USAGE.to_string()];
    };
    match sub.to_lowercase().as_str() {
        "wand" => executors::wand(guard),
        "create" => match rest {
            [name, ..] => executors::create(guard, sender, name).await,
            [] => vec!["Usage: /region create <name>".to_string()],
        },
        "delete" => match rest {
            [name, ..] => executors::delete(guard, sender, name).await,
            [] => vec!["Usage: /region delete <name>".to_string()],
        },
        "list" => executors::list(guard, sender).await,
        "addmember" => match rest {
            [region, player, ..] => executors::add_member(guard, sender, region, player).await,
            _ => vec!["Usage: /region addmember <region> <player>".to_string()],
        },
        "removemember" => match rest {
            [region, player, ..] => executors::remove_member(guard, sender, region, player).await,
            _ => vec!["Usage: /region removemember <region> <player>".to_string()],
        },
        "info" => match rest {
            [name, ..] => executors::info(guard, name).await,
            [] => vec!["Usage: /region info <region>".to_string()],
        },
        _ => vec![USAGE.to_string()],
    }
}
