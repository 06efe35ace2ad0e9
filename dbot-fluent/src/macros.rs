/// Overwrite-style setters on a `Request<'_, Payload>` for `Option` payload fields.
macro_rules! setters {
    ($( $(#[$attr:meta])* $field:ident: $ty:ty ),* $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                self.payload.$field = Some(value.into());
                self
            }
        )*
    };
}

/// Setters shared by every `send*` payload (reply, keyboard, silence, topic, business).
macro_rules! send_setters {
    () => {
        setters! {
            /// Send on behalf of a business connection.
            business_connection_id: String,
            /// Forum topic (or direct messages topic) to post into.
            message_thread_id: i32,
            /// Deliver silently.
            disable_notification: bool,
            /// Forbid forwarding and saving.
            protect_content: bool,
            /// Pay Telegram Stars to exceed broadcast limits.
            allow_paid_broadcast: bool,
            message_effect_id: String,
            reply_parameters: teloxide::types::ReplyParameters,
            reply_markup: teloxide::types::ReplyMarkup,
        }

        /// Shorthand for `reply_parameters` pointing at `message_id` in the same chat.
        pub fn reply_to(mut self, message_id: i32) -> Self {
            self.payload.reply_parameters = Some(teloxide::types::ReplyParameters::new(
                teloxide::types::MessageId(message_id),
            ));
            self
        }
    };
}

/// Implements [`crate::request::Method`] for a payload. Fields listed after `;` are filled from
/// the context with the named `Context::fill_*` method when left unset.
macro_rules! impl_method {
    ($ty:ident, $name:literal => $resp:ty $(; $($field:ident: $fill:ident),+ $(,)?)?) => {
        impl $crate::request::Method for $ty {
            const NAME: &'static str = $name;
            type Response = $resp;

            fn apply_defaults(
                &mut self,
                _ctx: &$crate::context::Context,
            ) -> ::dbot_core::Result<()> {
                $($( _ctx.$fill(&mut self.$field)?; )+)?
                Ok(())
            }
        }
    };
}
