/// Opaque references to the page components rendered at each route.
///
/// The component tree itself lives outside this layer; the router only needs
/// a stable identifier to hand the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Pass-through container that renders its matched child.
    RouterView,
    Profile,
    ExternalDashboard,
    Proposal,
    ProposalApply,
    Compliance,
    ComplianceSubmit,
    VesselsDashboard,
    ManageVessel,
    DcvPermit,
    DcvAdmission,
    DcvAdmissionForm,
    MooringLicenceDocumentsUpload,
    InternalDashboard,
    InternalProposal,
    InternalUser,
}
