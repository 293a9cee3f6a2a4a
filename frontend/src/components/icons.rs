use yew::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    ArrowUpRight,
    Award,
    CheckCircle,
    ChevronDown,
    Clock,
    Dumbbell,
    Facebook,
    HeartPulse,
    Instagram,
    Loader,
    MapPin,
    Menu,
    Moon,
    Phone,
    Quote,
    Star,
    Sun,
    Target,
    Timer,
    Trophy,
    Twitter,
    Users,
    X,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            Icon::Award => &[
                "M6 8a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
            ],
            Icon::CheckCircle => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "m9 12 2 2 4-4",
            ],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
            Icon::Dumbbell => &[
                "m6.5 6.5 11 11",
                "m21 21-1-1",
                "m3 3 1 1",
                "m18 22 4-4",
                "m2 6 4-4",
                "m3 10 7-7",
                "m14 21 7-7",
            ],
            Icon::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            Icon::HeartPulse => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
                "M3.22 12H9.5l.5-1 2 4.5 2-7 1.5 3.5h5.27",
            ],
            Icon::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            Icon::Loader => &["M21 12a9 9 0 1 1-6.219-8.56"],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2H4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-3 6-4 8z",
                "M14 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2h-4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-3 6-4 8z",
            ],
            Icon::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            Icon::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Icon::Target => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Icon::Timer => &["M10 2h4", "m12 14 3-3", "M4 14a8 8 0 1 0 16 0a8 8 0 1 0-16 0"],
            Icon::Trophy => &[
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
                "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
                "M4 22h16",
                "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
                "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
                "M18 2H6v7a6 6 0 0 0 12 0V2Z",
            ],
            Icon::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconSvg)]
pub fn icon_svg(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={classes!("icon", props.class.clone())}
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
