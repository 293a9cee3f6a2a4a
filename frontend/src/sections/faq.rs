use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::section_heading::SectionHeading;
use crate::content::FAQS;

/// Which FAQ entry is expanded. At most one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqState {
    active: Option<usize>,
}

impl Default for FaqState {
    fn default() -> Self {
        Self { active: Some(0) }
    }
}

impl FaqState {
    pub fn click(self, index: usize) -> Self {
        if self.active == Some(index) {
            Self { active: None }
        } else {
            Self { active: Some(index) }
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active(self) -> Option<usize> {
        self.active
    }
}

// Reveal target. Yew rewrites the whole `class` attribute whenever it
// changes, which would drop the `active` class the reveal controller adds, so
// this string never depends on state.
const ITEM_CLASS: &str = "faq-item reveal stagger-1";

fn panel_classes(open: bool) -> Classes {
    classes!("faq-panel", open.then_some("open"))
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={ITEM_CLASS}>
            <div class={panel_classes(props.open)}>
                <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                    <span class="question-text">{props.question.as_str()}</span>
                    <IconSvg icon={Icon::ChevronDown} class={classes!("faq-chevron")} />
                </button>
                // Always rendered; only the height changes.
                <div class="faq-answer">
                    <div class="faq-answer-inner">{props.answer.as_str()}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let state = use_state(FaqState::default);

    html! {
        <section id="faq" class="faq themed-surface">
            <div class="section-container narrow">
                <SectionHeading subtitle="Information" title="COMMON QUERIES" />
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(i, entry)| {
                        let on_toggle = {
                            let state = state.clone();
                            Callback::from(move |_: ()| state.set((*state).click(i)))
                        };
                        html! {
                            <FaqItem
                                key={i}
                                question={entry.question}
                                answer={entry.answer}
                                open={(*state).is_open(i)}
                                on_toggle={on_toggle}
                            />
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .faq {
                    padding: 8rem 0;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid var(--card-border);
                    background: var(--card-bg);
                    color: inherit;
                    text-align: left;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .faq-question:hover {
                    border-color: rgba(212, 175, 55, 0.5);
                }

                .faq-panel.open .faq-question {
                    background: var(--primary);
                    border-color: var(--primary);
                    color: #000;
                }

                .question-text {
                    font-size: 1.125rem;
                    font-weight: 900;
                    font-style: italic;
                    text-transform: uppercase;
                    letter-spacing: -0.025em;
                }

                .faq-chevron {
                    flex-shrink: 0;
                    transition: transform 0.5s ease;
                }

                .faq-panel.open .faq-chevron {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease-in-out;
                }

                .faq-panel.open .faq-answer {
                    max-height: 15rem;
                }

                .faq-answer-inner {
                    padding: 2rem;
                    color: var(--muted-text);
                    font-weight: 500;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{ACTIVE_CLASS, REVEAL_CLASSES};

    #[test]
    fn first_entry_starts_open() {
        let state = FaqState::default();
        assert_eq!(state.active(), Some(0));
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
    }

    #[test]
    fn clicking_with_nothing_open_opens_that_entry() {
        let closed = FaqState::default().click(0);
        assert_eq!(closed.active(), None);

        let state = closed.click(2);
        assert_eq!(state.active(), Some(2));
        assert!((0..FAQS.len()).filter(|i| state.is_open(*i)).eq([2]));
    }

    #[test]
    fn clicking_the_open_entry_closes_it() {
        let state = FaqState::default().click(3).click(3);
        assert_eq!(state.active(), None);
        assert!((0..FAQS.len()).all(|i| !state.is_open(i)));
    }

    #[test]
    fn clicking_another_entry_moves_the_selection() {
        let state = FaqState::default().click(1);
        assert_eq!(state.active(), Some(1));
        assert!(!state.is_open(0));

        let state = state.click(3);
        assert_eq!(state.active(), Some(3));
        assert!(!state.is_open(1));
    }

    #[test]
    fn reveal_target_class_is_independent_of_open_state() {
        let classes: Vec<&str> = ITEM_CLASS.split_whitespace().collect();
        assert!(classes.iter().any(|c| REVEAL_CLASSES.contains(c)));
        assert!(!classes.contains(&"open"));

        for open in [true, false] {
            let panel = panel_classes(open);
            assert!(REVEAL_CLASSES.iter().all(|c| !panel.contains(*c)));
            assert!(!panel.contains(ACTIVE_CLASS));
            assert_eq!(panel.contains("open"), open);
        }
    }

    #[test]
    fn never_more_than_one_open() {
        let mut state = FaqState::default();
        for i in [0, 1, 1, 2, 0, 3, 3, 2, 2, 1] {
            state = state.click(i);
            assert!((0..FAQS.len()).filter(|j| state.is_open(*j)).count() <= 1);
        }
    }
}
