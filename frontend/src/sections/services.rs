use yew::prelude::*;

use crate::components::icons::IconSvg;
use crate::components::section_heading::SectionHeading;
use crate::content::SERVICES;
use crate::reveal::stagger;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="section-container">
                <SectionHeading subtitle="The Arsenal" title="PREMIUM AMENITIES" />

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div key={service.title} class={classes!("service-card", "reveal-scale", stagger(i % 3 + 1))}>
                            <div class="service-icon">
                                <IconSvg icon={service.icon} size={32} />
                            </div>
                            <h3 class="service-title">{service.title}</h3>
                            <p class="service-desc">{service.desc}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .services {
                    padding: 8rem 0;
                    background: #09090b;
                }

                .services-grid {
                    display: grid;
                    gap: 2rem;
                }

                .service-card {
                    background: #18181b;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 2.5rem;
                    border-radius: 40px;
                    transition: all 0.5s ease;
                }

                .service-card:hover {
                    border-color: rgba(212, 175, 55, 0.5);
                    background: #27272a;
                }

                .service-icon {
                    background: #27272a;
                    color: var(--primary);
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 2rem;
                    transition: all 0.5s ease;
                }

                .service-card:hover .service-icon {
                    background: var(--primary);
                    color: #000;
                    transform: rotate(6deg);
                }

                .service-title {
                    font-size: 1.5rem;
                    font-weight: 900;
                    font-style: italic;
                    text-transform: uppercase;
                    color: #fff;
                    margin: 0 0 1rem;
                }

                .service-desc {
                    color: #71717a;
                    line-height: 1.6;
                    font-weight: 500;
                    margin: 0;
                }

                @media (min-width: 768px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .services-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
