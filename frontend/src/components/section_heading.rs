use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Align {
    #[default]
    Center,
    Left,
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub subtitle: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub align: Align,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let align = match props.align {
        Align::Center => "align-center",
        Align::Left => "align-left",
    };

    html! {
        <div class={classes!("section-heading", "reveal", align)}>
            <span class="eyebrow">{props.subtitle.as_str()}</span>
            <h2 class="section-title">{props.title.as_str()}</h2>
        </div>
    }
}
