//! # Restaurant
//!
//! A small restaurant simulation built on the [`agent_runtime`] crate: a
//! supervisor agent coordinates visitor agents and spawns order agents on
//! demand, communicating exclusively through asynchronous messages and
//! discovering each other through the directory service.
//!
//! ## Module Tour
//!
//! - [`content`] - the wire contract: REQUEST verbs, INFORM payloads.
//! - [`menu`] - the file-backed dish list, loaded once at startup.
//! - [`factory`] - the closed allow-list of spawnable agent types.
//! - [`supervisor_agent`] - request handling and visitor broadcast.
//! - [`visitor_agent`], [`order_agent`] - the domain agents' message
//!   contracts.
//! - [`lifecycle`] - the [`RestaurantSystem`](lifecycle::RestaurantSystem)
//!   orchestrator and its idempotent startup sequence.

pub mod content;
pub mod factory;
pub mod lifecycle;
pub mod menu;
pub mod order_agent;
pub mod supervisor_agent;
pub mod visitor_agent;

pub use content::{Content, RestaurantMessage};
pub use lifecycle::{RestaurantConfig, RestaurantSystem, StartupError};
pub use menu::{load_menu, Dish, Menu, MenuLoadError};
