/// One entry in the navigable path tree, mapping a URL path segment to a
/// renderable view and optional children.
///
/// A node that carries children renders a pass-through container; the page
/// content lives on the leaves. Paths are relative to the parent node: `/`
/// matches the parent's bare path, `:name` introduces a URL parameter.
#[derive(Debug, Clone)]
pub struct RouteNode<C> {
    pub path: String,
    pub component: C,
    pub name: Option<String>,
    pub enabled: bool,
    pub children: Vec<RouteNode<C>>,
}

impl<C> RouteNode<C> {
    pub fn new(path: impl Into<String>, component: C) -> Self {
        Self {
            path: path.into(),
            component,
            name: None,
            enabled: true,
            children: Vec::new(),
        }
    }

    /// Index child: matches the parent's bare path exactly.
    pub fn index(component: C) -> Self {
        Self::new("/", component)
    }

    /// Single-segment parameter child, e.g. `param("vessel_id", ..)` for `:vessel_id`.
    pub fn param(name: &str, component: C) -> Self {
        Self::new(format!(":{name}"), component)
    }

    /// Assign a route name for programmatic navigation. Names must be unique
    /// across the active tree; uniqueness is checked by `RouteTable::verify`.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_children(mut self, children: Vec<RouteNode<C>>) -> Self {
        self.children = children;
        self
    }

    /// Keep the node declared but exclude it (and its subtree) from the
    /// matchable table. Toggling a node out must not disturb its siblings.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Page {
        Home,
    }

    #[test]
    fn builder_defaults() {
        let node = RouteNode::new("home", Page::Home);
        assert_eq!(node.path, "home");
        assert!(node.enabled);
        assert!(node.name.is_none());
        assert!(node.children.is_empty());
    }

    #[test]
    fn param_path_shape() {
        let node = RouteNode::param("order_id", Page::Home);
        assert_eq!(node.path, ":order_id");
    }

    #[test]
    fn disabled_is_sticky() {
        let node = RouteNode::new("legacy", Page::Home).named("legacy").disabled();
        assert!(!node.enabled);
        assert_eq!(node.name.as_deref(), Some("legacy"));
    }
}
