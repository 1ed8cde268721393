use crate::models::{Coordinates, RoutePlan, RouteResult, RouteSource, WALK_ROUTE_PLANS};
use crate::services::loop_synthesizer::synthesize_loop;
use crate::services::openroute::RoundTripProvider;
use futures::future::join_all;
use std::sync::Arc;

/// Turns a location into one walking loop per [`RoutePlan`].
///
/// Every plan first asks the routing provider once. Any failure (HTTP error,
/// timeout, bad body, missing API key) is logged and replaced by a
/// synthesized loop with the same length and seed. There is no retry, and the
/// caller always gets exactly one route per plan, in plan order.
pub struct WalkRoutePlanner {
    provider: Arc<dyn RoundTripProvider>,
    plans: Vec<RoutePlan>,
}

impl WalkRoutePlanner {
    pub fn new(provider: Arc<dyn RoundTripProvider>) -> Self {
        Self::with_plans(provider, WALK_ROUTE_PLANS.to_vec())
    }

    pub fn with_plans(provider: Arc<dyn RoundTripProvider>, plans: Vec<RoutePlan>) -> Self {
        WalkRoutePlanner { provider, plans }
    }

    pub fn provider_configured(&self) -> bool {
        self.provider.is_configured()
    }

    /// Build all routes for `center`. Plans run concurrently; output keeps plan order.
    pub async fn plan_routes(&self, center: Coordinates) -> Vec<RouteResult> {
        tracing::info!(
            lat = center.lat,
            lon = center.lon,
            plans = self.plans.len(),
            "Walk routes request: ({:.4}, {:.4}), {} plans",
            center.lat, center.lon, self.plans.len()
        );

        let routes = join_all(
            self.plans
                .iter()
                .map(|plan| self.route_for_plan(center, plan)),
        )
        .await;

        let synthesized = routes
            .iter()
            .filter(|r| r.source == RouteSource::Synthesized)
            .count();
        if synthesized > 0 {
            tracing::info!(
                synthesized,
                total = routes.len(),
                "{}/{} walk routes used the fallback loop",
                synthesized, routes.len()
            );
        }

        routes
    }

    async fn route_for_plan(&self, center: Coordinates, plan: &RoutePlan) -> RouteResult {
        match self
            .provider
            .round_trip(center, plan.length_m, plan.seed)
            .await
        {
            Ok(coords) if !coords.is_empty() => RouteResult::new(plan, coords, RouteSource::Routed),
            Ok(_) => {
                tracing::warn!(
                    length_m = plan.length_m,
                    "Routing provider returned an empty path for {}m plan, synthesizing loop",
                    plan.length_m
                );
                self.fallback(center, plan)
            }
            Err(e) => {
                tracing::warn!(
                    length_m = plan.length_m,
                    seed = plan.seed,
                    error = %e,
                    "Round trip failed for {}m plan, synthesizing loop: {}",
                    plan.length_m, e
                );
                self.fallback(center, plan)
            }
        }
    }

    fn fallback(&self, center: Coordinates, plan: &RoutePlan) -> RouteResult {
        let coords = synthesize_loop(center, plan.length_km(), Some(plan.seed));
        RouteResult::new(plan, coords, RouteSource::Synthesized)
    }
}
