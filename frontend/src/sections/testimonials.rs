use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::section_heading::SectionHeading;
use crate::content::REVIEWS;
use crate::reveal::stagger;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <div class="section-container">
                <SectionHeading subtitle="The Reputation" title="MEMBER FEEDBACK" />

                <div class="testimonials-grid">
                    { for REVIEWS.iter().enumerate().map(|(i, review)| html! {
                        <div key={review.name} class={classes!("testimonial-card", "reveal", stagger(i + 1))}>
                            <IconSvg icon={Icon::Quote} size={60} class={classes!("testimonial-quote")} />
                            <div class="testimonial-stars">
                                { for (0..5).map(|j| html! {
                                    <IconSvg key={j} icon={Icon::Star} size={16} class={classes!("accent", "filled")} />
                                }) }
                            </div>
                            <p class="testimonial-text">{format!("\"{}\"", review.content)}</p>
                            <div class="testimonial-author">
                                <div class="testimonial-initial">{review.initial()}</div>
                                <div>
                                    <h4 class="testimonial-name">{review.name}</h4>
                                    <span class="testimonial-role">{review.role}</span>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    padding: 8rem 0;
                    background: rgba(24, 24, 27, 0.2);
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    overflow: hidden;
                }

                .testimonials-grid {
                    display: grid;
                    gap: 2rem;
                }

                .testimonial-card {
                    position: relative;
                    background: #09090b;
                    padding: 2.5rem;
                    border-radius: 40px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: border-color 0.3s ease;
                }

                .testimonial-card:hover {
                    border-color: rgba(212, 175, 55, 0.4);
                }

                .testimonial-quote {
                    position: absolute;
                    top: 2.5rem;
                    right: 2.5rem;
                    color: rgba(212, 175, 55, 0.1);
                }

                .testimonial-stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 2rem;
                }

                .testimonial-text {
                    color: #d4d4d8;
                    font-size: 1.25rem;
                    font-style: italic;
                    line-height: 1.6;
                    margin: 0 0 2.5rem;
                    transition: color 0.3s ease;
                }

                .testimonial-card:hover .testimonial-text {
                    color: #fff;
                }

                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .testimonial-initial {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 1rem;
                    background: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 900;
                    color: #000;
                    font-size: 1.25rem;
                }

                .testimonial-name {
                    color: #fff;
                    font-weight: 900;
                    text-transform: uppercase;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    margin: 0;
                }

                .testimonial-role {
                    color: var(--primary);
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }

                @media (min-width: 768px) {
                    .testimonials-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
