//! Demo entry point: starts the restaurant, then plays a patron through a
//! probe mailbox - fetching the menu, opening an order, and triggering a
//! visitor broadcast.

use agent_runtime::{setup_tracing, Message, MessageFilter, Performative};
use restaurant::supervisor_agent::{CREATE_ORDER_AGENT, SEND_MENU};
use restaurant::{Content, RestaurantConfig, RestaurantSystem};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut config = RestaurantConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(visitors) = args.next() {
        config.visitors = visitors
            .parse()
            .map_err(|_| format!("invalid visitor count: {visitors}"))?;
    }
    if let Some(menu_path) = args.next() {
        config.menu_path = menu_path.into();
    }

    info!(visitors = config.visitors, menu = %config.menu_path.display(), "starting restaurant");
    let restaurant = RestaurantSystem::new(config);
    let supervisor = restaurant.start().await.map_err(|e| e.to_string())?;

    // A probe stands in for an external patron talking to the supervisor.
    let (patron, replies) = restaurant
        .agents()
        .spawn_probe("patron")
        .map_err(|e| e.to_string())?;
    let informs = MessageFilter::match_performative(Performative::Inform);

    restaurant.agents().send(Message::request(
        patron.clone(),
        supervisor.clone(),
        Content::text(SEND_MENU),
    ));
    match replies.receive(&informs, Duration::from_secs(1)).await {
        Some(reply) => match reply.content {
            Content::Menu(menu) => info!(dishes = menu.dishes.len(), "menu received"),
            other => info!(?other, "unexpected menu reply"),
        },
        None => return Err("no reply to send_menu".into()),
    }

    restaurant.agents().send(Message::request(
        patron.clone(),
        supervisor.clone(),
        Content::text(CREATE_ORDER_AGENT),
    ));
    match replies.receive(&informs, Duration::from_secs(1)).await {
        Some(reply) => match reply.content {
            Content::Agent(order) => info!(order = %order, "order agent created"),
            other => info!(?other, "unexpected order reply"),
        },
        None => return Err("no reply to create_order_agent".into()),
    }

    restaurant.agents().send(Message::inform(
        patron,
        supervisor,
        Content::text("dinner is served"),
    ));
    // Give the broadcast a moment to reach the visitors before stopping.
    tokio::time::sleep(Duration::from_millis(100)).await;

    restaurant.shutdown().await;
    info!("restaurant closed");
    Ok(())
}
