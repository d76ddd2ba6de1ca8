// HTTP surface: REST endpoints, the JSON-RPC tool endpoint and health checks

pub mod handlers;
pub mod mcp;
pub mod models;
pub mod routes;
