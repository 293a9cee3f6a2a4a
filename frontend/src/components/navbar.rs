use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{self, GYM_NAME, LOCALITY, NAV_LINKS};
use crate::theme::Theme;

const SCROLLED_AFTER_PX: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps { theme, on_toggle_theme } = props;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let toggle_theme_and_close = {
        let on_toggle_theme = on_toggle_theme.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle_theme.emit(());
            menu_open.set(false);
        })
    };

    let theme_icon = if theme.is_dark() { Icon::Sun } else { Icon::Moon };

    html! {
        <nav class={classes!("top-nav", is_scrolled(scroll_y).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    <div class="nav-logo-mark">
                        <IconSvg icon={Icon::Trophy} class={classes!("ink")} />
                    </div>
                    <div class="nav-logo-text">
                        <span class="nav-logo-name">{GYM_NAME}</span>
                        <span class="nav-logo-locality">{LOCALITY}</span>
                    </div>
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.name} href={link.href} class="nav-link">{link.name}</a>
                    }) }
                    <button class="nav-theme-button" onclick={toggle_theme} aria-label="Toggle theme">
                        <IconSvg icon={theme_icon} size={18} />
                    </button>
                    <a href={content::tel_href()} class="nav-join">{"JOIN NOW"}</a>
                </div>

                <button class="burger-menu" onclick={open_menu} aria-label="Open menu">
                    <IconSvg icon={Icon::Menu} size={28} />
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                <button class="mobile-menu-close" onclick={close_menu.clone()} aria-label="Close menu">
                    <IconSvg icon={Icon::X} size={40} />
                </button>
                { for NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                    <a
                        key={link.name}
                        href={link.href}
                        onclick={close_menu.clone()}
                        class="mobile-menu-link"
                        style={format!("transition-delay: {}ms;", i * 100)}
                    >
                        {link.name}
                    </a>
                }) }
                <button class="mobile-menu-theme" onclick={toggle_theme_and_close}>
                    {theme.toggle_label()}
                    <IconSvg icon={theme_icon} />
                </button>
                <a href={content::tel_href()} class="mobile-menu-join">{"JOIN THE ELITE"}</a>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    padding: 2rem 0;
                    background: transparent;
                    transition: all 0.5s ease;
                }

                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(9, 9, 11, 0.7);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-decoration: none;
                }

                .nav-logo-mark {
                    padding: 0.5rem;
                    background: var(--primary);
                    border-radius: 0.5rem;
                    display: flex;
                    transition: transform 1s ease;
                }

                .nav-logo:hover .nav-logo-mark {
                    transform: rotate(360deg);
                }

                .nav-logo-text {
                    display: flex;
                    flex-direction: column;
                    line-height: 1;
                }

                .nav-logo-name {
                    font-size: 1.5rem;
                    font-weight: 900;
                    font-style: italic;
                    letter-spacing: -0.05em;
                    color: #fff;
                }

                .nav-logo-locality {
                    font-size: 9px;
                    font-weight: 900;
                    letter-spacing: 0.4em;
                    color: var(--primary);
                }

                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 2.5rem;
                }

                .nav-link {
                    font-size: 11px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #a1a1aa;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: var(--primary);
                }

                .nav-theme-button {
                    display: flex;
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    color: #a1a1aa;
                    cursor: pointer;
                }

                .nav-theme-button:hover {
                    color: var(--primary);
                    background: rgba(255, 255, 255, 0.1);
                }

                .nav-join {
                    background: var(--primary);
                    color: #000;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    font-weight: 900;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .nav-join:hover {
                    background: #fff;
                    transform: scale(1.05);
                }

                .burger-menu {
                    display: flex;
                    background: none;
                    border: none;
                    color: #fff;
                    padding: 0.5rem;
                    cursor: pointer;
                }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    background: #09090b;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 3rem;
                    transform: translateX(100%);
                    transition: transform 0.7s ease-in-out;
                }

                .mobile-menu.open {
                    transform: translateX(0);
                }

                .mobile-menu-close {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    background: none;
                    border: none;
                    color: #a1a1aa;
                    cursor: pointer;
                }

                .mobile-menu-link {
                    font-size: 3rem;
                    font-weight: 900;
                    font-style: italic;
                    text-transform: uppercase;
                    letter-spacing: -0.05em;
                    color: #fff;
                    text-decoration: none;
                }

                .mobile-menu-link:hover {
                    color: var(--primary);
                }

                .mobile-menu-theme {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: none;
                    border: none;
                    color: #a1a1aa;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                }

                .mobile-menu-join {
                    margin-top: 1rem;
                    background: var(--primary);
                    color: #000;
                    padding: 1.5rem 4rem;
                    border-radius: 9999px;
                    font-weight: 900;
                    font-size: 1.25rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }

                @media (min-width: 1024px) {
                    .nav-links {
                        display: flex;
                    }

                    .burger-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_style_starts_past_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }
}
