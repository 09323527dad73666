use moorport_routes::RouteNode;

use crate::views::View;

/// The applicant-facing portal subtree, mounted at `/external`.
///
/// `compliance/submit` is declared before `compliance/:compliance_id`: the
/// table matches in declaration order, so the static sibling must come first.
pub fn external_routes() -> RouteNode<View> {
    RouteNode::new("/external", View::RouterView).with_children(vec![
        RouteNode::index(View::ExternalDashboard).named("external-dashboard"),
        RouteNode::new("compliance/submit", View::ComplianceSubmit).named("submit_compliance"),
        RouteNode::new("compliance/:compliance_id", View::Compliance),
        RouteNode::new("proposal", View::RouterView).with_children(vec![
            RouteNode::index(View::ProposalApply).named("apply_proposal"),
            RouteNode::param("proposal_id", View::Proposal).named("draft_proposal"),
        ]),
        // Disabled pending rework of the DCV flows.
        RouteNode::new("dcv_permit", View::DcvPermit)
            .named("dcv_permit")
            .disabled(),
        RouteNode::new("dcv_admission", View::RouterView)
            .disabled()
            .with_children(vec![
                RouteNode::index(View::DcvAdmission).named("dcv_admission"),
            ]),
        RouteNode::new("vessels", View::VesselsDashboard).named("vessels-dashboard"),
        RouteNode::new("vesselownership", View::RouterView).with_children(vec![
            RouteNode::index(View::ManageVessel).named("new-vessel"),
            RouteNode::param("vessel_id", View::ManageVessel).named("manage-vessel"),
        ]),
    ])
}
