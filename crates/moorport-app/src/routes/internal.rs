use moorport_routes::RouteNode;

use crate::views::View;

/// The staff-facing portal subtree, mounted at `/internal`.
pub fn internal_routes() -> RouteNode<View> {
    RouteNode::new("/internal", View::RouterView).with_children(vec![
        RouteNode::index(View::InternalDashboard).named("internal-dashboard"),
        RouteNode::new("proposal", View::RouterView).with_children(vec![
            RouteNode::param("proposal_id", View::InternalProposal).named("internal-proposal"),
        ]),
        RouteNode::new("users", View::RouterView).with_children(vec![
            RouteNode::param("user_id", View::InternalUser).named("internal-user"),
        ]),
    ])
}
