//! # Order Agent
//!
//! One agent per open order, created on demand by the supervisor's
//! request handler. The order's domain logic is outside the coordination
//! core; the agent's contract here is to accept REQUEST messages about
//! the order and stay alive until the system retires it.

use crate::content::Content;
use agent_runtime::{
    AgentContext, Behavior, BehaviorError, Control, MessageFilter, Performative,
};
use async_trait::async_trait;
use tracing::info;

/// RunForever behavior accepting order-related requests.
pub struct RequestReceiver;

#[async_trait]
impl Behavior<Content> for RequestReceiver {
    fn name(&self) -> &'static str {
        "order_request_receiver"
    }

    async fn action(&mut self, ctx: &AgentContext<Content>) -> Result<Control, BehaviorError> {
        let filter = MessageFilter::match_performative(Performative::Request);
        let Some(message) = ctx.receive(&filter) else {
            return Ok(Control::Park);
        };
        let verb = message.content.as_text().unwrap_or_default();
        info!(agent = %ctx.id(), from = %message.sender, verb = %verb, "order request received");
        Ok(Control::Ran)
    }
}

/// Default behavior set wired by the factory.
pub fn behaviors() -> Vec<Box<dyn Behavior<Content>>> {
    vec![Box::new(RequestReceiver)]
}
