//! Generic fluent request: one payload type per Bot API method, one builder type for all of them.

use std::time::Duration;

use dbot_core::{RequestOptions, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::context::Context;

/// Describes one Bot API method: its wire name, its response type, and which payload fields
/// fall back to the context's ambient values.
pub trait Method: Serialize + Send + Sync {
    const NAME: &'static str;
    type Response: DeserializeOwned;

    /// Fills unset ambient fields (chat, user, message, query ids). Fails with
    /// [`dbot_core::DbotError::Precondition`] when a required value is available neither
    /// explicitly nor from the context.
    fn apply_defaults(&mut self, ctx: &Context) -> Result<()>;
}

/// A pending Bot API call. Created by a `Context` factory method, configured by chained
/// setters, consumed by [`Request::send`].
#[must_use = "requests do nothing until `.send().await` is called"]
pub struct Request<'a, M> {
    pub(crate) ctx: &'a Context,
    pub(crate) payload: M,
    pub(crate) options: Option<RequestOptions>,
}

impl<'a, M: Method> Request<'a, M> {
    pub(crate) fn new(ctx: &'a Context, payload: M) -> Self {
        Self {
            ctx,
            payload,
            options: ctx.default_options().cloned(),
        }
    }

    /// The payload as configured so far (ambient defaults are not applied yet).
    pub fn payload(&self) -> &M {
        &self.payload
    }

    /// Direct access for fields without a dedicated setter.
    pub fn payload_mut(&mut self) -> &mut M {
        &mut self.payload
    }

    pub fn options(&self) -> Option<&RequestOptions> {
        self.options.as_ref()
    }

    pub fn context(&self) -> &'a Context {
        self.ctx
    }

    /// HTTP timeout for this call only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.get_or_insert_with(RequestOptions::default).timeout = Some(timeout);
        self
    }

    /// Sends this call to another Bot API server (e.g. a self-hosted one).
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.options.get_or_insert_with(RequestOptions::default).api_url = Some(api_url.into());
        self
    }

    /// Applies ambient defaults and performs the call. Exactly one `BotApi::call` is made,
    /// or none when a precondition fails.
    #[instrument(name = "send", skip_all, fields(method = M::NAME))]
    pub async fn send(self) -> Result<M::Response> {
        let Request {
            ctx,
            mut payload,
            options,
        } = self;

        if let Err(e) = payload.apply_defaults(ctx) {
            warn!(error = %e, "Request not sent");
            return Err(e);
        }

        let params = to_params(&payload)?;
        debug!(params = %params, "step: calling Bot API");
        let result = ctx.bot().call(M::NAME, params, options.as_ref()).await?;
        Ok(serde_json::from_value(result)?)
    }
}

/// Serializes a payload into request parameters; unset (`null`) top-level fields are dropped.
pub fn to_params<M: Serialize>(payload: &M) -> Result<Value> {
    let mut params = serde_json::to_value(payload)?;
    if let Value::Object(map) = &mut params {
        map.retain(|_, v| !v.is_null());
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Probe {
        a: Option<i32>,
        b: Option<String>,
        c: Vec<i32>,
    }

    #[test]
    fn test_to_params_drops_unset_fields() {
        let params = to_params(&Probe {
            a: Some(0),
            b: None,
            c: vec![],
        })
        .unwrap();
        assert_eq!(params, json!({"a": 0, "c": []}));
    }
}
