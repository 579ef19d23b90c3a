use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::NodeId;
use crate::routing::RoutePlan;

/// Message reported to callers when no route connects the requested codes.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Rota não localizada";

/// Separator placed between consecutive nodes of a rendered path.
const PATH_SEPARATOR: &str = " => ";

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Single line: `AAA => BBB ao custo de R$ 5`.
    PlainText,
    /// One node per line followed by the total cost.
    Listing,
}

/// Render a path and its total cost as `AAA => BBB => CCC ao custo de R$ 2`.
pub fn format_route(path: &[NodeId], total_cost: u64) -> String {
    format!("{} ao custo de R$ {}", path.join(PATH_SEPARATOR), total_cost)
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub origin: NodeId,
    pub destination: NodeId,
    pub hops: usize,
    pub total_cost: u64,
    pub path: Vec<NodeId>,
    pub description: String,
}

impl RouteSummary {
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        if plan.path.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        Ok(Self {
            origin: plan.origin.clone(),
            destination: plan.destination.clone(),
            hops: plan.hop_count(),
            total_cost: plan.total_cost,
            path: plan.path.clone(),
            description: format_route(&plan.path, plan.total_cost),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.description.clone(),
            RouteRenderMode::Listing => self.render_listing(),
        }
    }

    fn render_listing(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} hops):",
            self.origin, self.destination, self.hops
        );
        let last = self.path.len().saturating_sub(1);
        for (index, node) in self.path.iter().enumerate() {
            let marker = match index {
                0 => '+',
                i if i == last => '-',
                _ => '|',
            };
            let _ = writeln!(buffer, "  {marker} {node}");
        }
        let _ = write!(buffer, "Total cost: R$ {}", self.total_cost);
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(path: &[&str], total_cost: u64) -> RoutePlan {
        RoutePlan {
            origin: path.first().map(|s| s.to_string()).unwrap_or_default(),
            destination: path.last().map(|s| s.to_string()).unwrap_or_default(),
            path: path.iter().map(|s| s.to_string()).collect(),
            total_cost,
        }
    }

    #[test]
    fn format_joins_path_with_arrows() {
        let path = vec!["AAA".to_string(), "BBB".to_string(), "CCC".to_string()];
        assert_eq!(format_route(&path, 2), "AAA => BBB => CCC ao custo de R$ 2");
    }

    #[test]
    fn single_node_path_formats_with_zero_cost() {
        let summary = RouteSummary::from_plan(&plan(&["AAA"], 0)).unwrap();
        assert_eq!(summary.hops, 0);
        assert_eq!(summary.description, "AAA ao custo de R$ 0");
    }

    #[test]
    fn empty_plan_is_rejected() {
        let error = RouteSummary::from_plan(&plan(&[], 0)).unwrap_err();
        assert!(matches!(error, Error::EmptyRoutePlan));
    }

    #[test]
    fn listing_marks_endpoints() {
        let summary = RouteSummary::from_plan(&plan(&["GRU", "BRC", "SCL"], 15)).unwrap();
        let text = summary.render(RouteRenderMode::Listing);

        assert!(text.contains("+ GRU"));
        assert!(text.contains("| BRC"));
        assert!(text.contains("- SCL"));
        assert!(text.ends_with("Total cost: R$ 15"));
    }

    #[test]
    fn summary_serializes_description() {
        let summary = RouteSummary::from_plan(&plan(&["AAA", "BBB"], 7)).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"description\":\"AAA => BBB ao custo de R$ 7\""));
        assert!(json.contains("\"total_cost\":7"));
    }
}
