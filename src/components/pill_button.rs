use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Neutral,
    Outline,
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct PillButtonProps {
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub onmouseenter: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

pub fn pill_classes(variant: Variant, size: Size) -> Classes {
    let variant = match variant {
        Variant::Primary => Some("btn-primary"),
        Variant::Outline => Some("btn-outline"),
        Variant::Neutral => None,
    };
    let size = match size {
        Size::Lg => "btn-lg",
        Size::Md => "btn-md",
    };
    classes!("btn-pill", variant, size)
}

/// Rounded call-to-action. An anchor when `href` is set, a button otherwise.
#[function_component(PillButton)]
pub fn pill_button(props: &PillButtonProps) -> Html {
    let class = classes!(pill_classes(props.variant, props.size), props.class.clone());
    let onmouseenter = props.onmouseenter.clone();

    match &props.href {
        Some(href) => html! {
            <a href={href.clone()} {class} {onmouseenter}>
                { for props.children.iter() }
            </a>
        },
        None => {
            let onclick = props.onclick.clone();
            html! {
                <button type="button" {class} {onclick} {onmouseenter}>
                    { for props.children.iter() }
                </button>
            }
        }
    }
}
