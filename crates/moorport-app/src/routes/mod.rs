mod external;
mod internal;

use moorport_routes::RouteNode;

pub use external::external_routes;
pub use internal::internal_routes;

use crate::views::View;

/// The full portal route forest: standalone account routes, the external and
/// internal subtrees, and the document-upload and admission entry points.
pub fn portal_routes() -> Vec<RouteNode<View>> {
    vec![
        RouteNode::new("/firsttime", View::Profile).named("first-time"),
        RouteNode::new("/account", View::Profile).named("account"),
        external_routes(),
        internal_routes(),
        RouteNode::new("/mla_documents_upload/:uuid", View::MooringLicenceDocumentsUpload)
            .named("mla-documents-upload"),
        RouteNode::new("/dcv_admission_form", View::DcvAdmissionForm).named("dcv-admission-form"),
    ]
}
