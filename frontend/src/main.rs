use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn, Level};
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

mod config;
mod content;
mod image_fetch;
mod reveal;
mod theme;
mod components {
    pub mod icons;
    pub mod nano_image;
    pub mod navbar;
    pub mod section_heading;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod services;
    pub mod testimonials;
}

use components::icons::{Icon, IconSvg};
use components::navbar::Navbar;
use reveal::{PagePhase, RevealController};
use sections::{
    about::About, contact::Contact, faq::Faq, footer::Footer, hero::Hero, services::Services,
    testimonials::Testimonials,
};
use theme::Theme;

type ControllerSlot = Rc<RefCell<Option<RevealController>>>;

fn start_reveals(page_root: &NodeRef, slot: &ControllerSlot) {
    let Some(root) = page_root.cast::<Element>() else {
        warn!("Page root not mounted; reveals skipped");
        return;
    };

    match RevealController::new() {
        Ok(controller) => {
            controller.observe_within(&root);
            *slot.borrow_mut() = Some(controller);
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable ({:?}); showing everything", e);
            reveal::reveal_all(&root);
        }
    }
}

#[function_component(Splash)]
fn splash() -> Html {
    html! {
        <div class="splash">
            <div class="splash-mark">
                <IconSvg icon={Icon::Trophy} size={80} class={classes!("accent", "spin-slow")} />
                <div class="splash-glow"></div>
            </div>
            <div class="splash-text">
                <span class="splash-status">{"ESTABLISHING CONNECTION"}</span>
                <span class="splash-hub">{"SK-27 ELITE HUB"}</span>
            </div>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    let phase = use_state(|| PagePhase::Splash);
    let theme = use_state(Theme::default);
    let page_root = use_node_ref();
    let controller: ControllerSlot = use_mut_ref(|| None);

    {
        let theme = *theme;
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                theme.apply();
                move || {
                    controller.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let phase_handle = phase.clone();
        let page_root = page_root.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |phase: &PagePhase| {
                if *phase == PagePhase::Observing {
                    start_reveals(&page_root, &controller);
                }
                let pending = phase.advance().map(|(delay, next)| {
                    Timeout::new(delay, move || phase_handle.set(next))
                });
                move || drop(pending)
            },
            *phase,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = (*theme).toggled();
            next.apply();
            theme.set(next);
        })
    };

    let scroll_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let mut options = ScrollToOptions::new();
            options.top(0.0).behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let page = if phase.shows_splash() {
        html! { <Splash /> }
    } else {
        html! {
            <div ref={page_root} class={classes!("page", theme.marker())}>
                <Navbar theme={*theme} on_toggle_theme={on_toggle_theme} />
                <Hero />
                <div class="clip-slant">
                    <About />
                </div>
                <Services />
                <Testimonials />
                <Faq />
                <Contact />
                <Footer />

                <button class="scroll-top" onclick={scroll_to_top} aria-label="Back to top">
                    <IconSvg icon={Icon::ArrowUpRight} class={classes!("scroll-top-arrow")} />
                </button>
            </div>
        }
    };

    html! {
        <>
            { page }
            <style>
                {r#"
                :root {
                    --primary: #d4af37;
                    --muted-text: #52525b;
                    --card-bg: #f4f4f5;
                    --card-border: #e4e4e7;
                }

                html.dark {
                    --muted-text: #a1a1aa;
                    --card-bg: #18181b;
                    --card-border: rgba(255, 255, 255, 0.05);
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    background: #09090b;
                    color: #fff;
                    font-family: 'Inter', system-ui, sans-serif;
                    -webkit-font-smoothing: antialiased;
                    overflow-x: hidden;
                }

                ::selection {
                    background: var(--primary);
                    color: #000;
                }

                .page {
                    transition: background-color 0.5s ease, color 0.5s ease;
                }

                .themed-surface {
                    background: #09090b;
                    color: #fff;
                    transition: background-color 0.5s ease, color 0.5s ease;
                }

                html:not(.dark) .themed-surface {
                    background: #fff;
                    color: #09090b;
                }

                .section-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-container.narrow {
                    max-width: 56rem;
                }

                .section-heading {
                    margin-bottom: 4rem;
                }

                .section-heading.align-center {
                    text-align: center;
                }

                .section-heading.align-left {
                    text-align: left;
                }

                .eyebrow {
                    display: block;
                    color: var(--primary);
                    font-weight: 900;
                    letter-spacing: 0.5em;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                    margin-bottom: 1rem;
                }

                .section-title {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 900;
                    font-style: italic;
                    text-transform: uppercase;
                    line-height: 0.9;
                    margin: 0;
                }

                .accent {
                    color: var(--primary);
                }

                .ink {
                    color: #000;
                }

                .ink-muted {
                    color: rgba(0, 0, 0, 0.6);
                }

                .filled {
                    fill: currentColor;
                }

                .spin {
                    animation: spin 1s linear infinite;
                }

                .spin-slow {
                    animation: spin 3s linear infinite;
                }

                .text-glow {
                    text-shadow: 0 0 30px rgba(212, 175, 55, 0.5);
                }

                .outline-text {
                    -webkit-text-stroke: 1px var(--primary);
                    color: transparent;
                }

                .clip-slant {
                    clip-path: polygon(0 5%, 100% 0, 100% 95%, 0 100%);
                    margin-top: -8rem;
                    padding-bottom: 8rem;
                }

                .nano-image {
                    position: relative;
                    overflow: hidden;
                    background: #18181b;
                    transition: opacity 0.7s ease;
                }

                .nano-image-img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 1s ease;
                }

                .nano-image:hover .nano-image-img {
                    transform: scale(1.1);
                }

                .nano-image-placeholder {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #18181b;
                }

                .nano-image-fallback {
                    color: #52525b;
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                .nano-image-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                    pointer-events: none;
                }

                .reveal,
                .reveal-left,
                .reveal-right,
                .reveal-scale {
                    opacity: 0;
                    transition: opacity 1s cubic-bezier(0.16, 1, 0.3, 1),
                        transform 1s cubic-bezier(0.16, 1, 0.3, 1);
                }

                .reveal {
                    transform: translateY(40px);
                }

                .reveal-left {
                    transform: translateX(-60px);
                }

                .reveal-right {
                    transform: translateX(60px);
                }

                .reveal-scale {
                    transform: scale(0.9);
                }

                .reveal.active,
                .reveal-left.active,
                .reveal-right.active,
                .reveal-scale.active {
                    opacity: 1;
                    transform: none;
                }

                .stagger-1 { transition-delay: 0.1s; }
                .stagger-2 { transition-delay: 0.2s; }
                .stagger-3 { transition-delay: 0.3s; }
                .stagger-4 { transition-delay: 0.4s; }
                .stagger-5 { transition-delay: 0.5s; }

                .splash {
                    position: fixed;
                    inset: 0;
                    background: #09090b;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2.5rem;
                    z-index: 1000;
                }

                .splash-mark {
                    position: relative;
                    display: flex;
                }

                .splash-glow {
                    position: absolute;
                    inset: 0;
                    background: rgba(212, 175, 55, 0.2);
                    filter: blur(48px);
                    animation: pulse 2s ease-in-out infinite;
                }

                .splash-text {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }

                .splash-status {
                    color: var(--primary);
                    font-weight: 900;
                    letter-spacing: 0.8em;
                    font-size: 12px;
                    animation: pulse 2s ease-in-out infinite;
                }

                .splash-hub {
                    color: #52525b;
                    font-size: 8px;
                    font-weight: 700;
                    letter-spacing: 0.4em;
                }

                .scroll-top {
                    position: fixed;
                    bottom: 2.5rem;
                    right: 2.5rem;
                    padding: 1.25rem;
                    background: var(--primary);
                    color: #000;
                    border: none;
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    cursor: pointer;
                    z-index: 90;
                    display: flex;
                    transition: transform 0.3s ease;
                }

                .scroll-top:hover {
                    transform: scale(1.1);
                }

                .scroll-top:active {
                    transform: scale(0.9);
                }

                .scroll-top-arrow {
                    transform: rotate(-45deg);
                    transition: transform 0.3s ease;
                }

                .scroll-top:hover .scroll-top-arrow {
                    transform: rotate(0deg);
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                @keyframes ping {
                    75%, 100% { transform: scale(2); opacity: 0; }
                }

                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: none; }
                }

                @keyframes pulse {
                    50% { opacity: 0.5; }
                }
                "#}
            </style>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting SK-27 landing page");
    yew::Renderer::<App>::new().render();
}
