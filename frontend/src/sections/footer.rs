use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::{GYM_NAME, TAGLINE};

const SOCIALS: [(Icon, &str); 3] = [
    (Icon::Instagram, "Instagram"),
    (Icon::Facebook, "Facebook"),
    (Icon::Twitter, "Twitter"),
];

fn copyright_line(year: i32) -> String {
    format!("© {} {} • {}", year, GYM_NAME, TAGLINE)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <div class="footer-brand-row">
                        <div class="footer-brand-mark">
                            <IconSvg icon={Icon::Dumbbell} size={24} class={classes!("ink")} />
                        </div>
                        <span class="footer-brand-name">{GYM_NAME}</span>
                    </div>
                    <p class="footer-locality">{"HAUZ KHAS VILLAGE • NEW DELHI"}</p>
                </div>

                <div class="footer-socials">
                    { for SOCIALS.iter().map(|(icon, label)| html! {
                        <a key={*label} href="#" class="footer-social" aria-label={*label}>
                            <IconSvg icon={*icon} size={24} />
                        </a>
                    }) }
                </div>

                <div class="footer-legal">
                    <p>{copyright_line(year)}</p>
                    <p class="footer-legal-note">{"DESIGNED FOR ELITE ATHLETES"}</p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 5rem 0;
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 3rem;
                }

                .footer-brand {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .footer-brand-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .footer-brand-mark {
                    background: var(--primary);
                    padding: 0.5rem;
                    border-radius: 0.75rem;
                    display: flex;
                }

                .footer-brand-name {
                    font-size: 1.875rem;
                    font-weight: 900;
                    font-style: italic;
                    letter-spacing: -0.05em;
                    color: #fff;
                }

                .footer-locality {
                    color: #52525b;
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.4em;
                    margin: 0;
                }

                .footer-socials {
                    display: flex;
                    gap: 2.5rem;
                }

                .footer-social {
                    color: #52525b;
                    display: flex;
                    transition: all 0.3s ease;
                }

                .footer-social:hover {
                    color: var(--primary);
                    transform: translateY(-0.25rem);
                }

                .footer-legal {
                    text-align: center;
                    color: #3f3f46;
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.1em;
                }

                .footer-legal p {
                    margin: 0;
                }

                .footer-legal-note {
                    margin-top: 0.5rem;
                    color: #27272a;
                }

                @media (min-width: 768px) {
                    .footer-inner {
                        flex-direction: row;
                    }

                    .footer-brand {
                        align-items: flex-start;
                    }

                    .footer-legal {
                        text-align: right;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year_and_tagline() {
        assert_eq!(copyright_line(2026), "© 2026 SK-27 GYM • BEYOND THE LIMITS");
    }
}
