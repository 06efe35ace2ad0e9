//! Nested builders (checklist tasks, stickers, shipping options, poll options) and the
//! pass-through of mutually exclusive fields.

use serde_json::json;
use teloxide::types::{ParseMode, StickerFormat};

mod recording_bot;
use recording_bot::{message_json, private_context, RecordingBot};

/// **Test: checklist tasks are appended in order with their own formatting.**
#[tokio::test]
async fn test_send_checklist_tasks() {
    let bot = RecordingBot::replying(message_json(5, "Release"));
    let ctx = private_context(bot.clone());

    ctx.send_checklist("bc-1", "<b>Release</b>")
        .title_parse_mode(ParseMode::Html)
        .task(1, "Tag <i>v1.2</i>")
        .html()
        .add()
        .task(2, "Publish notes")
        .entities(vec![])
        .add()
        .others_can_mark_tasks_as_done(true)
        .send()
        .await
        .unwrap();

    let call = bot.single_call();
    assert_eq!(call.method, "sendChecklist");
    assert_eq!(
        call.params,
        json!({
            "business_connection_id": "bc-1",
            "chat_id": 42,
            "checklist": {
                "title": "<b>Release</b>",
                "parse_mode": "HTML",
                "tasks": [
                    {"id": 1, "text": "Tag <i>v1.2</i>", "parse_mode": "HTML"},
                    {"id": 2, "text": "Publish notes", "text_entities": []}
                ],
                "others_can_mark_tasks_as_done": true
            }
        })
    );
}

/// **Test: a checklist edit targets the effective message.**
#[tokio::test]
async fn test_edit_message_checklist_defaults_message() {
    let bot = RecordingBot::replying(message_json(10, "Release"));
    let ctx = private_context(bot.clone());

    ctx.edit_message_checklist("bc-1", "Release")
        .task(1, "Done")
        .add()
        .send()
        .await
        .unwrap();

    let params = bot.single_call().params;
    assert_eq!(params["chat_id"], 42);
    assert_eq!(params["message_id"], 10);
    assert_eq!(params["checklist"]["tasks"], json!([{"id": 1, "text": "Done"}]));
}

/// **Test: icon color and custom emoji are both sent when both are set.**
#[tokio::test]
async fn test_create_forum_topic_sends_both_icon_fields() {
    let bot = RecordingBot::replying(json!({
        "message_thread_id": 77,
        "name": "Releases",
        "icon_color": 7322096,
        "icon_custom_emoji_id": "5312536423851630001"
    }));
    let ctx = private_context(bot.clone());

    let topic = ctx
        .create_forum_topic("Releases")
        .icon_color(0x6FB9F0u32)
        .icon_custom_emoji_id("5312536423851630001")
        .send()
        .await
        .unwrap();

    assert_eq!(topic.name, "Releases");
    assert_eq!(
        bot.single_call().params,
        json!({
            "chat_id": 42,
            "name": "Releases",
            "icon_color": 7322096,
            "icon_custom_emoji_id": "5312536423851630001"
        })
    );
}

/// **Test: stickers collect emoji additively; `emoji_list` replaces them.**
#[tokio::test]
async fn test_create_new_sticker_set_with_stickers() {
    let bot = RecordingBot::replying(json!(true));
    let ctx = private_context(bot.clone());

    ctx.create_new_sticker_set("party_by_testbot", "Party")
        .sticker("file-1", StickerFormat::Static)
        .emoji("😀")
        .emoji("🎉")
        .keywords(["party"])
        .add()
        .sticker("file-2", StickerFormat::Video)
        .emoji("🙂")
        .emoji_list(["👍"])
        .add()
        .send()
        .await
        .unwrap();

    assert_eq!(
        bot.single_call().params,
        json!({
            "user_id": 42,
            "name": "party_by_testbot",
            "title": "Party",
            "stickers": [
                {"sticker": "file-1", "format": "static", "emoji_list": ["😀", "🎉"], "keywords": ["party"]},
                {"sticker": "file-2", "format": "video", "emoji_list": ["👍"]}
            ]
        })
    );
}

/// **Test: single-sticker methods need a sticker before anything is sent.**
#[tokio::test]
async fn test_add_sticker_to_set_requires_sticker() {
    let bot = RecordingBot::replying(json!(true));
    let ctx = private_context(bot.clone());

    let err = ctx
        .add_sticker_to_set("party_by_testbot")
        .send()
        .await
        .unwrap_err();

    assert!(err.is_precondition());
    assert!(bot.calls().is_empty());
}

/// **Test: replacing a sticker sends the old id and the new sticker.**
#[tokio::test]
async fn test_replace_sticker_in_set() {
    let bot = RecordingBot::replying(json!(true));
    let ctx = private_context(bot.clone());

    ctx.replace_sticker_in_set("party_by_testbot", "old-file")
        .sticker("new-file", StickerFormat::Animated)
        .emoji("🔥")
        .add()
        .send()
        .await
        .unwrap();

    let params = bot.single_call().params;
    assert_eq!(params["old_sticker"], "old-file");
    assert_eq!(
        params["sticker"],
        json!({"sticker": "new-file", "format": "animated", "emoji_list": ["🔥"]})
    );
}

/// **Test: shipping options with their prices are appended in order.**
#[tokio::test]
async fn test_answer_shipping_query_options() {
    let bot = RecordingBot::replying(json!(true));
    let ctx = private_context(bot.clone()).with_shipping_query("sq-1");

    ctx.answer_shipping_query(true)
        .shipping_option("dhl", "DHL Express")
        .price("Shipping", 500)
        .price("Insurance", 100)
        .done()
        .shipping_option("pickup", "Pickup")
        .done()
        .send()
        .await
        .unwrap();

    assert_eq!(
        bot.single_call().params,
        json!({
            "shipping_query_id": "sq-1",
            "ok": true,
            "shipping_options": [
                {"id": "dhl", "title": "DHL Express", "prices": [
                    {"label": "Shipping", "amount": 500},
                    {"label": "Insurance", "amount": 100}
                ]},
                {"id": "pickup", "title": "Pickup", "prices": []}
            ]
        })
    );
}

/// **Test: a shipping answer outside a shipping query fails without a call.**
#[tokio::test]
async fn test_answer_shipping_query_without_query() {
    let bot = RecordingBot::replying(json!(true));
    let ctx = private_context(bot.clone());

    let err = ctx.answer_shipping_query(false).send().await.unwrap_err();

    assert!(err.to_string().contains("no shipping query"));
    assert!(bot.calls().is_empty());
}

/// **Test: invoice prices accumulate; Stars invoices need no provider token.**
#[tokio::test]
async fn test_send_invoice_prices() {
    let bot = RecordingBot::replying(message_json(3, "invoice"));
    let ctx = private_context(bot.clone());

    ctx.send_invoice("Coffee", "A cup of coffee", "order-1", "XTR")
        .add_price("Coffee", 50)
        .add_price("Tip", 5)
        .send()
        .await
        .unwrap();

    assert_eq!(
        bot.single_call().params,
        json!({
            "chat_id": 42,
            "title": "Coffee",
            "description": "A cup of coffee",
            "payload": "order-1",
            "currency": "XTR",
            "prices": [{"label": "Coffee", "amount": 50}, {"label": "Tip", "amount": 5}]
        })
    );
}

/// **Test: plain and formatted poll options keep their order.**
#[tokio::test]
async fn test_send_poll_options() {
    let bot = RecordingBot::replying(message_json(4, "poll"));
    let ctx = private_context(bot.clone());

    ctx.send_poll("Lunch?")
        .add_option("Pizza")
        .option("<b>Sushi</b>")
        .html()
        .done()
        .is_anonymous(false)
        .send()
        .await
        .unwrap();

    let params = bot.single_call().params;
    assert_eq!(params["question"], "Lunch?");
    assert_eq!(params["is_anonymous"], false);
    assert_eq!(
        params["options"],
        json!([
            {"text": "Pizza"},
            {"text": "<b>Sushi</b>", "text_parse_mode": "HTML"}
        ])
    );
}
