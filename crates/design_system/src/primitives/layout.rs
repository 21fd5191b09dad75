use super::*;

#[component]
/// Polymorphic container. `as_kind` picks the element from the closed [`ElementKind`] set.
pub fn Surface(
    #[prop(default = ElementKind::Div)] as_kind: ElementKind,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    as_kind
        .element()
        .attr("class", merge_layout_class("ui-surface", layout_class))
        .attr("id", id)
        .attr("role", role)
        .attr("aria-label", aria_label)
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "surface")
        .attr("data-ui-slot", ui_slot)
        .attr("data-ui-element", as_kind.token())
        .attr("data-ui-padding", padding.token())
        .child(children())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Main axis of a [`Flex`] container.
pub enum FlexDirection {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
}

impl Default for FlexDirection {
    fn default() -> Self {
        Self::Row
    }
}

impl FlexDirection {
    fn token(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

#[component]
/// Polymorphic flexbox container.
pub fn Flex(
    #[prop(default = ElementKind::Div)] as_kind: ElementKind,
    #[prop(default = FlexDirection::Row)] direction: FlexDirection,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(optional)] wrap: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    as_kind
        .element()
        .attr("class", merge_layout_class("ui-flex", layout_class))
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "flex")
        .attr("data-ui-slot", ui_slot)
        .attr("data-ui-element", as_kind.token())
        .attr("data-ui-direction", direction.token())
        .attr("data-ui-gap", gap.token())
        .attr("data-ui-align", align.token())
        .attr("data-ui-justify", justify.token())
        .attr("data-ui-wrap", bool_token(wrap))
        .child(children())
}

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping cluster.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-justify=justify.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Responsive grid. `columns` is the maximum column count on wide viewports.
pub fn Grid(
    #[prop(default = 3)] columns: u8,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="grid"
            data-ui-slot=ui_slot
            data-ui-columns=columns.max(1)
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Thin separator rule.
pub fn Divider(
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-divider", layout_class)
            role="separator"
            aria-orientation=orientation.token()
            data-ui-primitive="true"
            data-ui-kind="divider"
            data-ui-orientation=orientation.token()
        ></div>
    }
}
