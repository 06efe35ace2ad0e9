use std::sync::Arc;

use chrono::Local;
use dbot_fluent::{init_tracing, Context, TelegramConfig};
use teloxide::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = TelegramConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let bot = config.build_bot()?;
    let options = config.request_options();
    info!(start_time = %Local::now().format("%Y-%m-%d %H:%M:%S"), "Echo Bot started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let options = options.clone();
        async move {
            let ctx = Context::from_message(Arc::new(bot), &msg).with_default_options(options);
            let user_id = msg.from.as_ref().map(|u| u.id.0).unwrap_or(0);
            let chat_id = msg.chat.id.0;

            let Some(text) = msg.text() else {
                return respond(());
            };

            let reply = if text == "/clock" {
                format!("Current time: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))
            } else {
                format!("Echo: {}", text)
            };
            info!(user_id = user_id, chat_id = chat_id, message_content = %text, "Echoing message");

            match ctx.send_message(reply).reply_to(msg.id.0).send().await {
                Ok(sent) => info!(user_id = user_id, chat_id = chat_id, message_id = sent.id.0, "Sent echo response"),
                Err(e) => error!(user_id = user_id, chat_id = chat_id, error = %e, "Failed to send echo"),
            }
            respond(())
        }
    })
    .await;

    Ok(())
}
