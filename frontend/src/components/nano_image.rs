use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::image_fetch::{self, ImageResult};

/// Counter bumped on every mount and unmount of a slot.
///
/// A load started under one generation may only apply its result while that
/// generation is still current.
#[derive(Clone, Default)]
pub struct LoadGeneration(Rc<Cell<u64>>);

impl LoadGeneration {
    pub fn begin(&self) -> LoadTicket {
        let issued = self.0.get() + 1;
        self.0.set(issued);
        LoadTicket {
            generation: self.clone(),
            issued,
        }
    }

    pub fn invalidate(&self) {
        self.0.set(self.0.get() + 1);
    }
}

pub struct LoadTicket {
    generation: LoadGeneration,
    issued: u64,
}

impl LoadTicket {
    pub fn is_current(&self) -> bool {
        self.generation.0.get() == self.issued
    }
}

/// The state a finished load moves the slot to, or `None` when the load's
/// generation has passed and the payload must be dropped.
pub fn apply_result(
    ticket: &LoadTicket,
    current: &ImageResult,
    payload: Option<String>,
) -> Option<ImageResult> {
    ticket.is_current().then(|| current.settle(payload))
}

#[derive(Properties, PartialEq)]
pub struct NanoImageProps {
    pub prompt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// CSS transition delay for the frame.
    #[prop_or(0)]
    pub delay_ms: u32,
}

#[function_component(NanoImage)]
pub fn nano_image(props: &NanoImageProps) -> Html {
    let result = use_state(|| ImageResult::Pending);
    let generation = use_state(LoadGeneration::default);

    {
        let result = result.clone();
        let generation = (*generation).clone();
        let prompt = props.prompt.clone();
        use_effect_with_deps(
            move |_| {
                let ticket = generation.begin();
                spawn_local(async move {
                    let payload = image_fetch::fetch_image(&prompt).await;
                    match apply_result(&ticket, &result, payload) {
                        Some(next) => result.set(next),
                        None => debug!("Slot unmounted before image arrived; dropping result"),
                    }
                });
                move || generation.invalidate()
            },
            (),
        );
    }

    let body = match &*result {
        ImageResult::Pending => html! {
            <div class="nano-image-placeholder">
                <IconSvg icon={Icon::Loader} size={32} class={classes!("spin", "accent")} />
            </div>
        },
        ImageResult::Ready(src) => html! {
            <img src={src.clone()} alt={props.prompt.clone()} class="nano-image-img" />
        },
        ImageResult::Unavailable => html! {
            <div class="nano-image-placeholder nano-image-fallback">
                {"Media unavailable"}
            </div>
        },
    };

    html! {
        <div
            class={classes!("nano-image", props.class.clone())}
            aria-busy={(!result.is_settled()).to_string()}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { body }
            <div class="nano-image-shade"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_is_current_until_invalidated() {
        let generation = LoadGeneration::default();
        let ticket = generation.begin();
        assert!(ticket.is_current());

        generation.invalidate();
        assert!(!ticket.is_current());
    }

    #[test]
    fn remount_supersedes_earlier_ticket() {
        let generation = LoadGeneration::default();
        let first = generation.begin();
        generation.invalidate();
        let second = generation.begin();

        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn late_result_after_unmount_is_discarded() {
        let generation = LoadGeneration::default();
        let ticket = generation.begin();
        generation.invalidate();

        let payload = Some("data:image/png;base64,aGk=".to_string());
        assert_eq!(apply_result(&ticket, &ImageResult::Pending, payload), None);
    }

    #[test]
    fn mounted_slot_applies_result_once() {
        let generation = LoadGeneration::default();
        let ticket = generation.begin();

        let ready = apply_result(
            &ticket,
            &ImageResult::Pending,
            Some("data:image/png;base64,aGk=".to_string()),
        );
        assert_eq!(ready, Some(ImageResult::Ready("data:image/png;base64,aGk=".to_string())));

        // A stray second answer cannot move it.
        let again = apply_result(&ticket, &ready.clone().unwrap(), None);
        assert_eq!(again, ready);
    }

    #[test]
    fn failed_load_settles_unavailable() {
        let generation = LoadGeneration::default();
        let ticket = generation.begin();

        assert_eq!(
            apply_result(&ticket, &ImageResult::Pending, None),
            Some(ImageResult::Unavailable)
        );
    }

    #[test]
    fn result_from_previous_mount_is_dropped_after_remount() {
        let generation = LoadGeneration::default();
        let first = generation.begin();
        generation.invalidate();
        let second = generation.begin();

        assert_eq!(apply_result(&first, &ImageResult::Pending, None), None);
        assert_eq!(
            apply_result(&second, &ImageResult::Pending, Some("data:image/png;base64,aGk=".into())),
            Some(ImageResult::Ready("data:image/png;base64,aGk=".into()))
        );
    }
}
