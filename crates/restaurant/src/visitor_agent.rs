//! # Visitor Agent
//!
//! A restaurant patron. Its business logic (ordering, eating) lives
//! outside the coordination core; here it only honors the message
//! contract: advertise under the `"Visitor"` service type so the
//! supervisor's broadcast can find it, and consume the INFORM
//! notifications fanned out to it.

use crate::content::Content;
use agent_runtime::{
    AgentContext, Behavior, BehaviorError, Control, MessageFilter, Performative, RegisterService,
};
use async_trait::async_trait;
use tracing::info;

/// Directory tag every visitor advertises under.
pub const SERVICE_TYPE: &str = "Visitor";

/// RunForever behavior consuming supervisor broadcasts.
pub struct InformReceiver;

#[async_trait]
impl Behavior<Content> for InformReceiver {
    fn name(&self) -> &'static str {
        "visitor_inform_receiver"
    }

    async fn action(&mut self, ctx: &AgentContext<Content>) -> Result<Control, BehaviorError> {
        let filter = MessageFilter::match_performative(Performative::Inform);
        let Some(message) = ctx.receive(&filter) else {
            return Ok(Control::Park);
        };
        let text = message.content.as_text().unwrap_or_default();
        info!(agent = %ctx.id(), from = %message.sender, content = %text, "visitor notified");
        Ok(Control::Ran)
    }
}

/// Default behavior set wired by the factory.
pub fn behaviors() -> Vec<Box<dyn Behavior<Content>>> {
    vec![
        Box::new(RegisterService::new(SERVICE_TYPE)),
        Box::new(InformReceiver),
    ]
}
