use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::nano_image::NanoImage;
use crate::content::{ADDRESS, GYM_NAME, HIGHLIGHTS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about themed-surface">
            <div class="about-grid">
                <div class="about-gallery reveal-left">
                    <div class="about-gallery-glow"></div>
                    <div class="about-gallery-grid">
                        <div class="about-column">
                            <NanoImage
                                prompt="Luxury gym interior with soft lighting and professional setup"
                                class={classes!("about-image", "reveal-scale", "stagger-1")}
                            />
                            <div class="about-card about-card-dark reveal stagger-2">
                                <h3 class="about-card-figure accent">{"4.6"}</h3>
                                <p class="about-card-caption">{"RATING ON GOOGLE REVIEWS"}</p>
                            </div>
                        </div>
                        <div class="about-column about-column-offset">
                            <div class="about-card about-card-gold reveal stagger-3">
                                <IconSvg icon={Icon::Clock} size={40} class={classes!("ink")} />
                                <h3 class="about-card-figure ink">{"17H"}</h3>
                                <p class="about-card-caption ink-muted">{"OPEN FROM 6AM TO 11PM"}</p>
                            </div>
                            <NanoImage
                                prompt="Detail shot of high-end imported barbell and weight plates"
                                class={classes!("about-image", "reveal-scale", "stagger-4")}
                            />
                        </div>
                    </div>
                </div>

                <div class="about-copy reveal-right">
                    <span class="eyebrow stagger-1">{"The Sanctuary"}</span>
                    <h2 class="about-title stagger-2">
                        {"DELHI'S ELITE "}<br />
                        <span class="accent outline-text">{"EXPERIENCE"}</span>
                    </h2>
                    <p class="about-text stagger-3">
                        {format!(
                            "Located at {}, {} is the pinnacle of strength training in the city. We combine high-performance equipment with a space designed for focus and luxury.",
                            ADDRESS, GYM_NAME
                        )}
                    </p>

                    <div class="about-highlights stagger-4">
                        { for HIGHLIGHTS.iter().map(|item| html! {
                            <div key={*item} class="about-highlight">
                                <div class="about-highlight-icon">
                                    <IconSvg icon={Icon::CheckCircle} size={18} />
                                </div>
                                <span class="about-highlight-text">{*item}</span>
                            </div>
                        }) }
                    </div>

                    <a href="#contact" class="about-link stagger-5">
                        {"VISIT THE FACILITY "}
                        <IconSvg icon={Icon::ArrowUpRight} size={20} class={classes!("about-link-arrow")} />
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .about {
                    padding: 8rem 0;
                    position: relative;
                    overflow: hidden;
                }

                .about-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    gap: 6rem;
                    align-items: center;
                }

                .about-gallery {
                    position: relative;
                }

                .about-gallery-glow {
                    position: absolute;
                    top: -2.5rem;
                    left: -2.5rem;
                    width: 10rem;
                    height: 10rem;
                    background: var(--primary);
                    opacity: 0.2;
                    filter: blur(64px);
                    border-radius: 9999px;
                }

                .about-gallery-grid {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .about-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .about-column-offset {
                    padding-top: 3rem;
                }

                .about-image {
                    height: 20rem;
                    border-radius: 1.5rem;
                }

                .about-card {
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                }

                .about-card-dark {
                    background: #09090b;
                }

                .about-card-gold {
                    background: var(--primary);
                }

                .about-card-figure {
                    font-size: 3.75rem;
                    font-weight: 900;
                    font-style: italic;
                    letter-spacing: -0.05em;
                    line-height: 1;
                    margin: 1.5rem 0 0.5rem;
                }

                .about-card-dark .about-card-figure {
                    margin-top: 0;
                }

                .about-card-caption {
                    color: #71717a;
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.1em;
                    margin: 0;
                }

                .about-title {
                    font-size: clamp(3.75rem, 8vw, 6rem);
                    font-weight: 900;
                    font-style: italic;
                    letter-spacing: -0.05em;
                    line-height: 0.85;
                    margin: 0 0 2.5rem;
                }

                .about-text {
                    color: var(--muted-text);
                    font-size: 1.25rem;
                    font-weight: 500;
                    line-height: 1.6;
                    margin: 0 0 3rem;
                }

                .about-highlights {
                    display: grid;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }

                .about-highlight {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .about-highlight-icon {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: rgba(212, 175, 55, 0.1);
                    color: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.3s ease;
                }

                .about-highlight:hover .about-highlight-icon {
                    background: var(--primary);
                    color: #000;
                }

                .about-highlight-text {
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 11px;
                }

                .about-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 1rem;
                    font-weight: 900;
                    color: var(--primary);
                    letter-spacing: 0.2em;
                    font-size: 0.875rem;
                    text-decoration: none;
                }

                .about-link-arrow {
                    transition: transform 0.3s ease;
                }

                .about-link:hover .about-link-arrow {
                    transform: translate(0.25rem, -0.25rem);
                }

                @media (min-width: 768px) {
                    .about-highlights {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (min-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
