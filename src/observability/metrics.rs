//! Metrics collection.
//!
//! # Metrics
//! - `shell_route_resolutions_total` (counter): resolutions by route
//! - `shell_page_loads_total` (counter): loader invocations by route
//! - `shell_provider_instances_total` (counter): provider handles built
//! - `shell_provider_replacements_total` (counter): handles replaced
//! - `shell_provider_health` (gauge): 1=healthy, 0=unhealthy
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host installs a recorder
//! - Without a recorder every call is a no-op

use metrics::{counter, gauge};

/// Route label used for the catch-all entry.
pub const CATCH_ALL_LABEL: &str = "catch_all";

pub fn record_route_resolved(route: &str) {
    counter!("shell_route_resolutions_total", "route" => route.to_string()).increment(1);
}

pub fn record_page_loaded(route: &str) {
    counter!("shell_page_loads_total", "route" => route.to_string()).increment(1);
}

pub fn record_provider_created() {
    counter!("shell_provider_instances_total").increment(1);
}

pub fn record_provider_replaced() {
    counter!("shell_provider_replacements_total").increment(1);
}

pub fn record_provider_health(healthy: bool) {
    gauge!("shell_provider_health").set(if healthy { 1.0 } else { 0.0 });
}
