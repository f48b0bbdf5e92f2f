//! # Supervisor Agent
//!
//! The single coordinating agent. On top of the generic runtime it
//! composes three behaviors:
//!
//! 1. [`RegisterService`] (RunOnce) - advertise under `"Supervisor"`.
//! 2. [`RequestHandler`] (RunForever) - serve the REQUEST verbs of the
//!    wire contract: `"send_menu"` and `"create_order_agent"`.
//! 3. [`InformBroadcast`] (RunForever) - fan every received INFORM out to
//!    all registered visitors.
//!
//! ## Reply contract
//!
//! Every REQUEST receives exactly one INFORM reply, whatever happened:
//! recognized verb with payload, unknown verb with empty payload, or a
//! failed spawn with empty payload. Callers cannot distinguish failure
//! from an unknown verb by message kind; see DESIGN.md before changing
//! this.

use crate::content::Content;
use crate::factory;
use crate::menu::Menu;
use crate::visitor_agent;
use agent_runtime::{
    AgentContext, Behavior, BehaviorError, Control, Message, MessageFilter, Performative,
    RegisterService,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Directory tag the supervisor advertises under.
pub const SERVICE_TYPE: &str = "Supervisor";

/// Local name of the one supervisor agent.
pub const LOCAL_NAME: &str = "supervisor";

/// REQUEST verb: reply with the menu snapshot.
pub const SEND_MENU: &str = "send_menu";

/// REQUEST verb: spawn a new order agent and reply with its identity.
pub const CREATE_ORDER_AGENT: &str = "create_order_agent";

/// RunForever behavior serving REQUEST messages.
///
/// The order sequence counter is private to this behavior; it only ever
/// runs on the supervisor's single task, so no synchronization is needed.
pub struct RequestHandler {
    menu: Arc<Menu>,
    orders_created: u64,
}

impl RequestHandler {
    pub fn new(menu: Arc<Menu>) -> Self {
        Self {
            menu,
            orders_created: 0,
        }
    }
}

#[async_trait]
impl Behavior<Content> for RequestHandler {
    fn name(&self) -> &'static str {
        "supervisor_request_handler"
    }

    async fn action(&mut self, ctx: &AgentContext<Content>) -> Result<Control, BehaviorError> {
        let filter = MessageFilter::match_performative(Performative::Request);
        let Some(message) = ctx.receive(&filter) else {
            return Ok(Control::Park);
        };

        let verb = message.content.as_text().unwrap_or_default();
        debug!(agent = %ctx.id(), from = %message.sender, verb = %verb, "request received");

        let mut reply_content = Content::Empty;
        match verb {
            SEND_MENU => {
                reply_content = Content::Menu(self.menu.clone());
            }
            CREATE_ORDER_AGENT => {
                let local_name = format!("order {}", self.orders_created);
                match factory::create_agent(ctx.system(), "OrderAgent", &local_name) {
                    Ok(order_id) => {
                        self.orders_created += 1;
                        reply_content = Content::Agent(order_id);
                    }
                    Err(error) => {
                        // Reply is still sent, with no payload set.
                        warn!(agent = %ctx.id(), %error, "order agent creation failed");
                    }
                }
            }
            // Unknown verbs get the same empty-payload reply.
            _ => {}
        }

        ctx.send(Message::inform(
            ctx.id().clone(),
            message.sender.clone(),
            reply_content,
        ));
        Ok(Control::Ran)
    }
}

/// RunForever behavior fanning INFORM messages out to every visitor.
///
/// Each recipient gets its own enumerated copy, not a shared multicast:
/// visitor `i` receives `"from supervisor {content} {i}"`.
pub struct InformBroadcast;

#[async_trait]
impl Behavior<Content> for InformBroadcast {
    fn name(&self) -> &'static str {
        "supervisor_inform_broadcast"
    }

    async fn action(&mut self, ctx: &AgentContext<Content>) -> Result<Control, BehaviorError> {
        let filter = MessageFilter::match_performative(Performative::Inform);
        let Some(message) = ctx.receive(&filter) else {
            return Ok(Control::Park);
        };

        let text = message.content.as_text().unwrap_or_default();
        info!(agent = %ctx.id(), from = %message.sender, content = %text, "supervisor received inform");

        let visitors = match ctx.directory().search(visitor_agent::SERVICE_TYPE) {
            Ok(visitors) => visitors,
            Err(error) => {
                // Skip the fan-out this cycle; the next inform retries.
                warn!(agent = %ctx.id(), %error, "visitor lookup failed");
                return Ok(Control::Ran);
            }
        };

        for (index, visitor) in visitors.iter().enumerate() {
            ctx.send(Message::inform(
                ctx.id().clone(),
                visitor.clone(),
                Content::text(format!("from supervisor {text} {index}")),
            ));
        }
        Ok(Control::Ran)
    }
}

/// The supervisor's full behavior set, in scheduling order.
pub fn behaviors(menu: Arc<Menu>) -> Vec<Box<dyn Behavior<Content>>> {
    vec![
        Box::new(RegisterService::new(SERVICE_TYPE)),
        Box::new(RequestHandler::new(menu)),
        Box::new(InformBroadcast),
    ]
}
