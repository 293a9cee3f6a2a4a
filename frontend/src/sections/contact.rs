use log::debug;
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::section_heading::{Align, SectionHeading};
use crate::content::{self, ADDRESS, GOALS, HOURS, PHONE_DISPLAY};

#[derive(Properties, PartialEq)]
struct ContactRowProps {
    icon: Icon,
    title: AttrValue,
    children: Children,
}

#[function_component(ContactRow)]
fn contact_row(props: &ContactRowProps) -> Html {
    html! {
        <div class="contact-row">
            <div class="contact-row-icon">
                <IconSvg icon={props.icon} size={32} />
            </div>
            <div>
                <h4 class="contact-row-title">{props.title.as_str()}</h4>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    // The form has no submission target; submitting only stays on the page.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("Contact form submitted; nothing is sent");
    });

    html! {
        <section id="contact" class="contact">
            <div class="contact-grid">
                <div class="reveal-left">
                    <SectionHeading align={Align::Left} subtitle="Reach Out" title="GET IN TOUCH" />
                    <div class="contact-rows">
                        <ContactRow icon={Icon::MapPin} title="The Command Center">
                            <a href={content::map_url()} target="_blank" rel="noopener noreferrer" class="contact-address">
                                {ADDRESS}
                            </a>
                        </ContactRow>
                        <ContactRow icon={Icon::Phone} title="Hotline">
                            <a href={content::tel_href()} class="contact-phone">{PHONE_DISPLAY}</a>
                        </ContactRow>
                        <ContactRow icon={Icon::Clock} title="Hours">
                            { for HOURS.iter().map(|line| html! { <p class="contact-hours">{*line}</p> }) }
                        </ContactRow>
                    </div>
                </div>

                <div class="reveal-right">
                    <div class="contact-panel">
                        <h3 class="contact-panel-title">
                            {"READY TO "}<span class="accent">{"START?"}</span>
                        </h3>
                        <form class="contact-form" {onsubmit}>
                            <input type="text" placeholder="YOUR FULL NAME" class="contact-input" />
                            <input type="tel" placeholder="MOBILE NUMBER" class="contact-input" />
                            <select class="contact-input contact-select">
                                { for GOALS.iter().map(|goal| html! { <option>{*goal}</option> }) }
                            </select>
                            <button type="submit" class="contact-submit">{"SEND TRANSMISSION"}</button>
                        </form>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    padding: 8rem 0;
                    background: #09090b;
                    position: relative;
                    overflow: hidden;
                }

                .contact-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    gap: 6rem;
                    align-items: stretch;
                }

                .contact-rows {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }

                .contact-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 2rem;
                }

                .contact-row-icon {
                    padding: 1.5rem;
                    background: #18181b;
                    border: 1px solid rgba(212, 175, 55, 0.2);
                    border-radius: 30px;
                    color: var(--primary);
                    display: flex;
                    transition: all 0.5s ease;
                }

                .contact-row:hover .contact-row-icon {
                    background: var(--primary);
                    color: #000;
                }

                .contact-row-title {
                    font-weight: 900;
                    font-size: 1.5rem;
                    font-style: italic;
                    text-transform: uppercase;
                    color: #fff;
                    margin: 0 0 0.5rem;
                }

                .contact-address {
                    color: #a1a1aa;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    text-decoration: none;
                }

                .contact-address:hover {
                    color: var(--primary);
                }

                .contact-phone {
                    display: block;
                    color: var(--primary);
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    text-decoration: none;
                }

                .contact-phone:hover {
                    color: #fff;
                }

                .contact-hours {
                    color: #a1a1aa;
                    font-size: 1.125rem;
                    margin: 0;
                }

                .contact-panel {
                    background: rgba(24, 24, 27, 0.5);
                    padding: 3rem;
                    border-radius: 50px;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    box-sizing: border-box;
                }

                .contact-panel-title {
                    font-size: 2.25rem;
                    font-weight: 900;
                    font-style: italic;
                    color: #fff;
                    margin: 0 0 2rem;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .contact-input {
                    width: 100%;
                    box-sizing: border-box;
                    background: rgba(9, 9, 11, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 1.25rem 2rem;
                    color: #fff;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    font-size: 0.75rem;
                    outline: none;
                    transition: border-color 0.3s ease;
                }

                .contact-input:focus {
                    border-color: var(--primary);
                }

                .contact-select {
                    color: #71717a;
                    appearance: none;
                }

                .contact-submit {
                    width: 100%;
                    background: var(--primary);
                    color: #000;
                    font-weight: 900;
                    letter-spacing: 0.1em;
                    padding: 1.5rem 0;
                    border: none;
                    border-radius: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .contact-submit:hover {
                    background: #fff;
                }

                .contact-submit:active {
                    transform: scale(0.95);
                }

                @media (min-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
