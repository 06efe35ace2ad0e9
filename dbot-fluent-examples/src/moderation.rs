//! Group moderation with fluent builders. Reply to a member's message with:
//! `/ban`, `/mute <minutes>`, `/unmute`, `/pin`; or send `/topic <name>` in a forum.

use std::sync::Arc;

use chrono::Local;
use dbot_fluent::{init_tracing, Context, DbotError, TelegramConfig};
use teloxide::prelude::*;
use teloxide::types::ChatPermissions;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = TelegramConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let bot = config.build_bot()?;
    let options = config.request_options();
    info!(start_time = %Local::now().format("%Y-%m-%d %H:%M:%S"), "Moderation Bot started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let options = options.clone();
        async move {
            let ctx = Context::from_message(Arc::new(bot), &msg).with_default_options(options);
            let Some(command) = msg.text().and_then(|t| t.split_whitespace().next()) else {
                return respond(());
            };

            if let Err(e) = handle_command(&ctx, &msg, command).await {
                error!(chat_id = msg.chat.id.0, command = %command, error = %e, "Command failed");
                report_failure(&ctx, msg.id.0, &e).await;
            }
            respond(())
        }
    })
    .await;

    Ok(())
}

/// Tells the chat a command failed. Returns whether the report itself was delivered.
async fn report_failure(ctx: &Context, reply_to: i32, failure: &DbotError) -> bool {
    match ctx
        .send_message(format!("Failed: {}", failure))
        .reply_to(reply_to)
        .send()
        .await
    {
        Ok(_) => true,
        Err(e) => {
            warn!(chat_id = ?ctx.effective_chat_id(), error = %e, "Failed to report command failure");
            false
        }
    }
}

async fn handle_command(ctx: &Context, msg: &Message, command: &str) -> Result<(), DbotError> {
    let target = msg.reply_to_message();
    let target_user = target.and_then(|m| m.from.as_ref()).map(|u| u.id);

    match (command, target_user) {
        ("/ban", Some(user_id)) => {
            ctx.ban_chat_member()
                .user_id(user_id)
                .revoke_messages(true)
                .send()
                .await?;
            info!(chat_id = msg.chat.id.0, user_id = user_id.0, "Banned member");
            ctx.send_message("Banned.").reply_to(msg.id.0).send().await?;
        }
        ("/mute", Some(user_id)) => {
            let minutes: i64 = ctx
                .args()
                .first()
                .and_then(|m| m.parse().ok())
                .unwrap_or(60);
            ctx.restrict_chat_member(ChatPermissions::empty())
                .user_id(user_id)
                .until_date(Local::now().timestamp() + minutes * 60)
                .send()
                .await?;
            info!(chat_id = msg.chat.id.0, user_id = user_id.0, minutes = minutes, "Muted member");
            ctx.send_message(format!("Muted for {} min.", minutes))
                .reply_to(msg.id.0)
                .send()
                .await?;
        }
        ("/unmute", Some(user_id)) => {
            ctx.restrict_chat_member(ChatPermissions::all())
                .user_id(user_id)
                .send()
                .await?;
            ctx.send_message("Unmuted.").reply_to(msg.id.0).send().await?;
        }
        ("/pin", _) => match target {
            Some(pinned) => {
                ctx.pin_chat_message()
                    .message_id(pinned.id.0)
                    .disable_notification(true)
                    .send()
                    .await?;
            }
            None => {
                ctx.send_message("Reply to the message to pin.")
                    .reply_to(msg.id.0)
                    .send()
                    .await?;
            }
        },
        ("/topic", _) => {
            let name = ctx.args().join(" ");
            if name.is_empty() {
                ctx.send_message("Usage: /topic <name>").send().await?;
            } else {
                let topic = ctx.create_forum_topic(name).send().await?;
                info!(chat_id = msg.chat.id.0, topic = %topic.name, "Created forum topic");
            }
        }
        ("/ban" | "/mute" | "/unmute", None) => {
            ctx.send_message("Reply to a member's message.")
                .reply_to(msg.id.0)
                .send()
                .await?;
        }
        _ => warn!(chat_id = msg.chat.id.0, command = %command, "Unknown command"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use dbot_fluent::{BotApi, RequestOptions};
    use serde_json::Value;
    use teloxide::types::ChatId;

    /// Fails every call with a 403 and counts the attempts.
    #[derive(Default)]
    struct BlockedBot {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl BotApi for BlockedBot {
        async fn call(
            &self,
            method: &str,
            _params: Value,
            _options: Option<&RequestOptions>,
        ) -> dbot_fluent::Result<Value> {
            self.calls.lock().unwrap().push(method.to_string());
            Err(DbotError::Api {
                code: 403,
                description: "Forbidden: bot was kicked from the group chat".to_string(),
                retry_after: None,
                migrate_to_chat_id: None,
            })
        }
    }

    #[tokio::test]
    async fn test_report_failure_survives_a_second_failure() {
        let bot = Arc::new(BlockedBot::default());
        let ctx = Context::new(bot.clone()).with_chat(ChatId(-100));

        let delivered = report_failure(&ctx, 5, &DbotError::precondition("no effective user")).await;

        assert!(!delivered);
        assert_eq!(*bot.calls.lock().unwrap(), vec!["sendMessage".to_string()]);
    }
}
