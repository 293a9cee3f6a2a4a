use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::nano_image::NanoImage;
use crate::content::LOCALITY;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-backdrop">
                <NanoImage
                    prompt="Atmospheric dark high-end gym interior with luxury weight machines and golden ambient lighting"
                    class={classes!("hero-backdrop-image")}
                />
                <div class="hero-backdrop-fade"></div>
            </div>

            <div class="hero-grid">
                // Already active: the copy is above the fold when the splash lifts.
                <div class="hero-copy reveal stagger-1 active">
                    <div class="hero-badge">
                        <span class="hero-badge-dot">
                            <span class="hero-badge-ping"></span>
                            <span class="hero-badge-core"></span>
                        </span>
                        <span class="hero-badge-text">{format!("NOW OPEN AT {}", LOCALITY)}</span>
                    </div>

                    <h1 class="hero-title reveal stagger-2">
                        {"BEYOND THE "}<br />
                        <span class="accent text-glow outline-text">{"LIMITS"}</span>
                    </h1>

                    <p class="hero-subtitle reveal stagger-3">
                        {"Step into Delhi's most luxurious fitness sanctuary. Imported machinery, elite coaching, and a space designed for ultimate transformation."}
                    </p>

                    <div class="hero-actions reveal stagger-4">
                        <a href="#contact" class="hero-cta">
                            {"BOOK A TRIAL"}
                            <IconSvg icon={Icon::ArrowRight} class={classes!("hero-cta-arrow")} />
                        </a>
                        <a href="#about" class="hero-secondary">{"EXPLORE THE GYM"}</a>
                    </div>
                </div>

                <div class="hero-feature reveal-right stagger-3">
                    <div class="hero-feature-frame">
                        <div class="hero-feature-glow"></div>
                        <NanoImage
                            prompt="A bodybuilder training on luxury golden-black gym machines in a cinematic low-key environment"
                            class={classes!("hero-feature-image")}
                        />
                        <div class="hero-rating">
                            <div class="hero-rating-stars">
                                { for (0..5).map(|i| html! {
                                    <IconSvg key={i} icon={Icon::Star} size={20} class={classes!("accent", "filled")} />
                                }) }
                            </div>
                            <p class="hero-rating-title">{"ELITE STATUS"}</p>
                            <p class="hero-rating-note">{"96+ GOOGLE REVIEWS"}</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="hero-scroll-hint">
                <div class="hero-scroll-bar"></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: #09090b;
                    padding: 6rem 0 5rem;
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero-backdrop-image {
                    width: 100%;
                    height: 100%;
                    opacity: 0.3;
                }

                .hero-backdrop-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(9, 9, 11, 0.9), rgba(9, 9, 11, 0.4), #09090b);
                }

                .hero-grid {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }

                .hero-copy {
                    text-align: center;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.5rem 1.5rem;
                    margin-bottom: 2.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                }

                .hero-badge-dot {
                    position: relative;
                    display: flex;
                    width: 0.75rem;
                    height: 0.75rem;
                }

                .hero-badge-ping,
                .hero-badge-core {
                    position: absolute;
                    inset: 0;
                    border-radius: 9999px;
                    background: var(--primary);
                }

                .hero-badge-ping {
                    opacity: 0.75;
                    animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                }

                .hero-badge-text {
                    color: #f4f4f5;
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.4em;
                }

                .hero-title {
                    font-size: clamp(3.75rem, 11vw, 150px);
                    font-weight: 900;
                    font-style: italic;
                    letter-spacing: -0.05em;
                    line-height: 0.8;
                    color: #fff;
                    margin: 0 0 2rem;
                }

                .hero-subtitle {
                    color: #a1a1aa;
                    font-size: clamp(1.125rem, 2vw, 1.5rem);
                    font-weight: 500;
                    max-width: 42rem;
                    margin: 0 auto 3.5rem;
                    line-height: 1.6;
                }

                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .hero-cta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: var(--primary);
                    color: #000;
                    padding: 1.25rem 2.5rem;
                    border-radius: 9999px;
                    font-weight: 900;
                    font-size: 1.125rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .hero-cta:hover {
                    background: #fff;
                    transform: scale(1.05);
                }

                .hero-cta:hover .hero-cta-arrow {
                    transform: translateX(0.5rem);
                }

                .hero-cta-arrow {
                    transition: transform 0.3s ease;
                }

                .hero-secondary {
                    padding: 1.25rem 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    border-radius: 9999px;
                    font-weight: 900;
                    font-size: 1.125rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }

                .hero-secondary:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .hero-feature {
                    display: none;
                }

                .hero-feature-frame {
                    position: relative;
                }

                .hero-feature-glow {
                    position: absolute;
                    inset: -1rem;
                    background: rgba(212, 175, 55, 0.1);
                    filter: blur(64px);
                    border-radius: 9999px;
                }

                .hero-feature-image {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    height: 650px;
                    border-radius: 60px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .hero-rating {
                    display: none;
                    position: absolute;
                    bottom: 2.5rem;
                    right: -2.5rem;
                    z-index: 20;
                    background: #09090b;
                    padding: 2rem;
                    border-radius: 40px;
                    border: 1px solid rgba(212, 175, 55, 0.2);
                }

                .hero-rating-stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 0.5rem;
                }

                .hero-rating-title {
                    color: #fff;
                    font-weight: 900;
                    font-style: italic;
                    font-size: 1.25rem;
                    margin: 0 0 0.25rem;
                }

                .hero-rating-note {
                    color: #71717a;
                    font-weight: 700;
                    font-size: 10px;
                    letter-spacing: 0.1em;
                    margin: 0;
                }

                .hero-scroll-hint {
                    position: absolute;
                    bottom: 3rem;
                    left: 50%;
                    transform: translateX(-50%);
                    opacity: 0.4;
                    animation: bounce 1s infinite;
                }

                .hero-scroll-bar {
                    width: 0.25rem;
                    height: 3rem;
                    background: var(--primary);
                    border-radius: 9999px;
                }

                @media (min-width: 768px) {
                    .hero {
                        padding-top: 12rem;
                    }

                    .hero-actions {
                        flex-direction: row;
                        justify-content: center;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .hero-copy {
                        text-align: left;
                    }

                    .hero-subtitle {
                        margin-left: 0;
                    }

                    .hero-actions {
                        justify-content: flex-start;
                    }

                    .hero-feature {
                        display: block;
                    }
                }

                @media (min-width: 1280px) {
                    .hero-rating {
                        display: block;
                    }
                }
                "#}
            </style>
        </section>
    }
}
