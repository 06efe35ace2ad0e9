//! Invoices and the shipping / pre-checkout answers of the payment flow.
//!
//! Prices are given in the smallest currency unit; use `currency = "XTR"` with an empty
//! provider token for Telegram Stars.

use serde::Serialize;
use teloxide::types::{InlineKeyboardMarkup, Message, Recipient, ReplyParameters};

use crate::context::Context;
use crate::request::Request;
use crate::types::{LabeledPrice, ShippingOption};

/// Setters shared by `sendInvoice` and `createInvoiceLink`.
macro_rules! invoice_setters {
    () => {
        setters! {
            provider_token: String,
            max_tip_amount: u32,
            suggested_tip_amounts: Vec<u32>,
            /// JSON passed through to the payment provider.
            provider_data: String,
            photo_url: String,
            photo_size: u32,
            photo_width: u32,
            photo_height: u32,
            need_name: bool,
            need_phone_number: bool,
            need_email: bool,
            need_shipping_address: bool,
            send_phone_number_to_provider: bool,
            send_email_to_provider: bool,
            /// Final price depends on the shipping method; enables shipping queries.
            is_flexible: bool,
        }

        /// Appends one price portion.
        pub fn add_price(mut self, label: impl Into<String>, amount: u32) -> Self {
            self.payload.prices.push(LabeledPrice::new(label, amount));
            self
        }
    };
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendInvoice {
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub title: String,
    pub description: String,
    /// Bot-defined payload, not shown to the user.
    pub payload: String,
    pub provider_token: Option<String>,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    pub max_tip_amount: Option<u32>,
    pub suggested_tip_amounts: Option<Vec<u32>>,
    /// Deep-link parameter; unset makes forwarded copies payable too.
    pub start_parameter: Option<String>,
    pub provider_data: Option<String>,
    pub photo_url: Option<String>,
    pub photo_size: Option<u32>,
    pub photo_width: Option<u32>,
    pub photo_height: Option<u32>,
    pub need_name: Option<bool>,
    pub need_phone_number: Option<bool>,
    pub need_email: Option<bool>,
    pub need_shipping_address: Option<bool>,
    pub send_phone_number_to_provider: Option<bool>,
    pub send_email_to_provider: Option<bool>,
    pub is_flexible: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    /// First button must be a Pay button.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}
impl_method!(SendInvoice, "sendInvoice" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendInvoice> {
    setters! {
        chat_id: Recipient,
        message_thread_id: i32,
        start_parameter: String,
        disable_notification: bool,
        protect_content: bool,
        allow_paid_broadcast: bool,
        message_effect_id: String,
        reply_parameters: ReplyParameters,
        reply_markup: InlineKeyboardMarkup,
    }
    invoice_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInvoiceLink {
    pub business_connection_id: Option<String>,
    pub title: String,
    pub description: String,
    pub payload: String,
    pub provider_token: Option<String>,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    /// Seconds between subscription charges (Stars only).
    pub subscription_period: Option<u32>,
    pub max_tip_amount: Option<u32>,
    pub suggested_tip_amounts: Option<Vec<u32>>,
    pub provider_data: Option<String>,
    pub photo_url: Option<String>,
    pub photo_size: Option<u32>,
    pub photo_width: Option<u32>,
    pub photo_height: Option<u32>,
    pub need_name: Option<bool>,
    pub need_phone_number: Option<bool>,
    pub need_email: Option<bool>,
    pub need_shipping_address: Option<bool>,
    pub send_phone_number_to_provider: Option<bool>,
    pub send_email_to_provider: Option<bool>,
    pub is_flexible: Option<bool>,
}
impl_method!(CreateInvoiceLink, "createInvoiceLink" => String);

impl<'a> Request<'a, CreateInvoiceLink> {
    setters! {
        business_connection_id: String,
        subscription_period: u32,
    }
    invoice_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnswerShippingQuery {
    pub shipping_query_id: Option<String>,
    pub ok: bool,
    /// Required when `ok`.
    pub shipping_options: Option<Vec<ShippingOption>>,
    /// Required when not `ok`.
    pub error_message: Option<String>,
}
impl_method!(AnswerShippingQuery, "answerShippingQuery" => bool; shipping_query_id: fill_shipping_query);

impl<'a> Request<'a, AnswerShippingQuery> {
    setters! {
        shipping_query_id: String,
        error_message: String,
    }

    /// Starts a shipping option; `.done()` appends it and returns this request.
    pub fn shipping_option(
        self,
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> ShippingOptionBuilder<'a> {
        ShippingOptionBuilder {
            parent: self,
            option: ShippingOption {
                id: id.into(),
                title: title.into(),
                prices: Vec::new(),
            },
        }
    }
}

/// One shipping option under construction.
#[must_use = "call `.done()` to attach the shipping option"]
pub struct ShippingOptionBuilder<'a> {
    parent: Request<'a, AnswerShippingQuery>,
    option: ShippingOption,
}

impl<'a> ShippingOptionBuilder<'a> {
    /// Appends one price portion.
    pub fn price(mut self, label: impl Into<String>, amount: u32) -> Self {
        self.option.prices.push(LabeledPrice::new(label, amount));
        self
    }

    pub fn done(mut self) -> Request<'a, AnswerShippingQuery> {
        self.parent
            .payload
            .shipping_options
            .get_or_insert_with(Vec::new)
            .push(self.option);
        self.parent
    }
}

/// Must be answered within 10 seconds of the pre-checkout query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnswerPreCheckoutQuery {
    pub pre_checkout_query_id: Option<String>,
    pub ok: bool,
    pub error_message: Option<String>,
}
impl_method!(AnswerPreCheckoutQuery, "answerPreCheckoutQuery" => bool; pre_checkout_query_id: fill_pre_checkout_query);

impl<'a> Request<'a, AnswerPreCheckoutQuery> {
    setters! {
        pre_checkout_query_id: String,
        /// Shown to the user when `ok` is false.
        error_message: String,
    }
}

impl Context {
    pub fn send_invoice(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        currency: impl Into<String>,
    ) -> Request<'_, SendInvoice> {
        Request::new(
            self,
            SendInvoice {
                title: title.into(),
                description: description.into(),
                payload: payload.into(),
                currency: currency.into(),
                ..Default::default()
            },
        )
    }

    pub fn create_invoice_link(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        currency: impl Into<String>,
    ) -> Request<'_, CreateInvoiceLink> {
        Request::new(
            self,
            CreateInvoiceLink {
                title: title.into(),
                description: description.into(),
                payload: payload.into(),
                currency: currency.into(),
                ..Default::default()
            },
        )
    }

    pub fn answer_shipping_query(&self, ok: bool) -> Request<'_, AnswerShippingQuery> {
        Request::new(
            self,
            AnswerShippingQuery {
                ok,
                ..Default::default()
            },
        )
    }

    pub fn answer_pre_checkout_query(&self, ok: bool) -> Request<'_, AnswerPreCheckoutQuery> {
        Request::new(
            self,
            AnswerPreCheckoutQuery {
                ok,
                ..Default::default()
            },
        )
    }
}
